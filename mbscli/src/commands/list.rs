use super::*;

/// Print the literal names of all available search strategies.
pub fn list_strategies() {
    for name in search::STRATEGY_NAMES {
        println!("{}", name);
    }
}
