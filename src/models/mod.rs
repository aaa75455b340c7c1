pub mod layout;
pub mod operator;
pub mod outcome;
