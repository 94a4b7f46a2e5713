//! Gesture math.
//!
//! Pure functions shared by pointer-driven gestures and their tests.

use crate::types::{Direction, Size, Vec2};

/// Outcome of one resize step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeGeometry {
    pub size: Size,
    pub translate: Vec2,
}

pub struct GestureMath;

impl GestureMath {
    /// Translate for a drag step: pointer travel since pointer-down added to
    /// the translate the element started from.
    #[inline]
    pub fn drag_translate(pointer: Vec2, start_pointer: Vec2, start_translate: Vec2) -> Vec2 {
        pointer - start_pointer + start_translate
    }

    /// Size and translate for a resize step driven by `direction`.
    ///
    /// East/south handles grow the box with the pointer. West/north handles
    /// grow it against the pointer and shift the translate by the same amount
    /// so the opposite edge stays put. Sizes clamp at zero; the shift is
    /// clamped with them.
    pub fn resize(direction: Direction, delta: Vec2, start_size: Size, start_translate: Vec2) -> ResizeGeometry {
        let (width, tx) = Self::resize_axis(
            direction.horizontal_sign(),
            delta.x,
            start_size.width,
            start_translate.x,
        );
        let (height, ty) = Self::resize_axis(
            direction.vertical_sign(),
            delta.y,
            start_size.height,
            start_translate.y,
        );

        ResizeGeometry {
            size: Size::new(width, height),
            translate: Vec2::new(tx, ty),
        }
    }

    fn resize_axis(sign: f64, delta: f64, start_len: f64, start_offset: f64) -> (f64, f64) {
        if sign > 0.0 {
            ((start_len + delta).max(0.0), start_offset)
        } else if sign < 0.0 {
            let len = (start_len - delta).max(0.0);
            (len, start_offset + (start_len - len))
        } else {
            (start_len, start_offset)
        }
    }
}
