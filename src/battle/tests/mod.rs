pub mod common;





#[cfg(test)]
mod test_after_knockout;
