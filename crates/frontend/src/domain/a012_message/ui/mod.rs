mod center;

pub use center::MessageCenter;
