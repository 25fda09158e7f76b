mod fields;
mod home;

pub use home::HomePage;
