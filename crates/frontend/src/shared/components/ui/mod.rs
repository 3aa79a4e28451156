pub mod button;
pub mod date_input;
pub mod input;
pub mod select;

pub use button::Button;
pub use date_input::DateInput;
pub use input::Input;
pub use select::Select;
