use stroke_rom_core::BoundingBox;

/// Maps y-up glyph coordinates into the y-down space of a document.
///
/// The glyph origin is translated so that the run's bounding box sits inside
/// a uniform border, plus an optional extra offset on each axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformEnvelope {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl TransformEnvelope {
    pub fn new(scale: f64, border: i32, x_offset: i32, y_offset: i32, bbox: BoundingBox) -> Self {
        Self {
            scale,
            translate_x: scale * f64::from(border + x_offset - bbox.min_x),
            translate_y: scale * f64::from(border + y_offset + bbox.max_y),
        }
    }

    /// The `transform` attribute value. Every term is truncated to a whole
    /// number, so output stays byte-comparable across renderers.
    pub fn matrix(&self) -> String {
        format!(
            "matrix({},0,0,{},{},{})",
            self.scale as i64,
            -self.scale as i64,
            self.translate_x as i64,
            self.translate_y as i64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_and_translates_the_box_into_the_border() {
        let envelope = TransformEnvelope::new(2.0, 10, 0, 0, BoundingBox::new(0, -12, 10, 8));
        assert_eq!(envelope.translate_x, 20.0);
        assert_eq!(envelope.translate_y, 36.0);
        assert_eq!(envelope.matrix(), "matrix(2,0,0,-2,20,36)");
    }

    #[test]
    fn offsets_apply_per_axis() {
        let envelope = TransformEnvelope::new(1.0, 0, 3, 5, BoundingBox::new(-2, 0, 4, 8));
        assert_eq!(envelope.matrix(), "matrix(1,0,0,-1,5,13)");
    }

    #[test]
    fn fractional_terms_are_truncated() {
        let envelope = TransformEnvelope::new(2.5, 1, 0, 0, BoundingBox::new(0, 0, 4, 8));
        assert_eq!(envelope.translate_x, 2.5);
        assert_eq!(envelope.translate_y, 22.5);
        assert_eq!(envelope.matrix(), "matrix(2,0,0,-2,2,22)");
    }
}
