#[cfg(test)]
mod point_tests;
