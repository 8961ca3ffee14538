mod tests {
    use myrtio_matrix_composer::{
        DimCurve, FloatFramebuffer, MAX_LEVEL, QuantizedFramebuffer, ScrollDirection,
    };
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Splat { row: f32, column: f32, peak: u8, falloff: f32 },
        Compose { row_offset: isize, column_offset: isize },
        Dim(f32),
        Scroll { left: bool, count: usize, fill: u8 },
        Set { row: usize, column: usize, value: u8 },
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-2.0f32..7.0, -2.0f32..7.0, any::<u8>(), -3.0f32..6.0).prop_map(
                |(row, column, peak, falloff)| Op::Splat {
                    row,
                    column,
                    peak,
                    falloff
                }
            ),
            (-6isize..6, -6isize..6).prop_map(|(row_offset, column_offset)| Op::Compose {
                row_offset,
                column_offset
            }),
            (-1.0f32..3.0).prop_map(Op::Dim),
            (any::<bool>(), 0usize..8, any::<u8>())
                .prop_map(|(left, count, fill)| Op::Scroll { left, count, fill }),
            (0usize..5, 0usize..5, any::<u8>())
                .prop_map(|(row, column, value)| Op::Set { row, column, value }),
        ]
    }

    fn far_offset() -> impl Strategy<Value = isize> {
        prop_oneof![5isize..64, -64isize..=-5]
    }

    proptest! {
        #[test]
        fn quantized_cells_stay_in_range(
            ops in prop::collection::vec(op(), 1..40),
            squared in any::<bool>(),
        ) {
            let curve = if squared { DimCurve::Squared } else { DimCurve::Linear };
            let mut buffer = QuantizedFramebuffer::new().with_dim_curve(curve);
            let mut layer = QuantizedFramebuffer::new();
            layer.splat_point(2.0, 2.0, 9, 1.0);

            for op in ops {
                match op {
                    Op::Splat { row, column, peak, falloff } => {
                        buffer.splat_point(row, column, peak, falloff);
                    }
                    Op::Compose { row_offset, column_offset } => {
                        buffer.compose_add(&layer, row_offset, column_offset);
                    }
                    Op::Dim(factor) => buffer.dim(factor),
                    Op::Scroll { left, count, fill } => {
                        let direction = if left { ScrollDirection::Left } else { ScrollDirection::Right };
                        buffer.scroll(direction, count, fill);
                    }
                    Op::Set { row, column, value } => buffer.set_cell(row, column, value),
                }
                for cell in buffer.rows().iter().flatten() {
                    prop_assert!(*cell <= MAX_LEVEL);
                }
            }
        }

        #[test]
        fn compose_outside_bounds_is_identity(
            row in 0.0f32..4.0,
            column in 0.0f32..4.0,
            far in far_offset(),
            any_offset in -64isize..64,
            far_rows in any::<bool>(),
        ) {
            let mut source = FloatFramebuffer::new();
            source.splat_point(row, column, 1.0, 0.2);
            let mut target = FloatFramebuffer::new();
            target.splat_point(column, row, 0.5, 0.1);
            let before = target.clone();

            let (row_offset, column_offset) = if far_rows { (far, any_offset) } else { (any_offset, far) };
            target.compose_add(&source, row_offset, column_offset);
            prop_assert_eq!(target, before);
        }

        #[test]
        fn rendered_levels_stay_in_range(
            row in -3.0f32..8.0,
            column in -3.0f32..8.0,
            peak in -4.0f32..4.0,
            falloff in -2.0f32..2.0,
        ) {
            let mut buffer = FloatFramebuffer::new();
            buffer.splat_point(row, column, peak, falloff);
            let image = buffer.render();
            prop_assert!(image.iter().all(|level| level <= MAX_LEVEL));
            prop_assert_eq!(image, buffer.render());
        }
    }
}
