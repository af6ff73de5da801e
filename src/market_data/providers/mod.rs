pub mod switcheo;

pub use switcheo::SwitcheoPriceFeed;
