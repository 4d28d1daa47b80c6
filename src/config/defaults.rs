//! Default value functions for serde deserialization.

pub fn length_front() -> f32 {
    0.17
}

pub fn length_back() -> f32 {
    0.17
}

pub fn width() -> f32 {
    0.34
}

pub fn buffer() -> f32 {
    0.05
}
