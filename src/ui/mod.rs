pub mod buttons;
pub mod style;

pub use buttons::Btn;
