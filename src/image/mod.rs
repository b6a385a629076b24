pub mod io;
pub mod rgba;
pub mod traits;
pub mod view;

pub use self::rgba::{ImageRgba8, Rgba8, BLACK, RED, WHITE};
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::view::ImageRgba8View;
