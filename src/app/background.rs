use leptos::prelude::*;

const COLUMN_COUNT: usize = 28;
const COLUMN_SPACING_PX: usize = 36;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MatrixVariant {
    #[default]
    Subtle,
    Strong,
}

impl MatrixVariant {
    fn intensity(self) -> &'static str {
        match self {
            MatrixVariant::Strong => "opacity-60 dark:opacity-50",
            MatrixVariant::Subtle => {
                "opacity-45 dark:opacity-30 sm:opacity-50 sm:dark:opacity-35 lg:opacity-55 lg:dark:opacity-40"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct MatrixColumn {
    left_px: usize,
    duration_s: f64,
    delay_s: f64,
}

impl MatrixColumn {
    fn new(layer: Layer, index: usize) -> Self {
        let i = index as f64;
        // `0.0 - x` so the first column's delay is +0, not -0
        let (duration_s, delay_s) = match layer {
            Layer::Front => (3.0 + (index % 5) as f64 * 0.7, 0.0 - i * 0.35),
            Layer::Back => (4.0 + ((index + 3) % 5) as f64 * 0.8, -(i * 0.4 + 2.0)),
        };
        Self {
            left_px: index * COLUMN_SPACING_PX,
            duration_s,
            delay_s,
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {}px; animation-duration: {:.2}s; animation-delay: {:.2}s",
            self.left_px, self.duration_s, self.delay_s
        )
    }
}

fn layer_columns(layer: Layer) -> impl Iterator<Item = MatrixColumn> {
    (0..COLUMN_COUNT).map(move |i| MatrixColumn::new(layer, i))
}

/// Decorative falling columns behind the page content.
#[component]
pub fn BackgroundMatrix(#[prop(optional)] variant: MatrixVariant) -> impl IntoView {
    let render_layer = |layer: Layer| {
        view! {
            <div class="fx-matrix-layer">
                {layer_columns(layer)
                    .map(|col| view! { <div class="fx-matrix-column" style=col.style() /> })
                    .collect_view()}
            </div>
        }
    };

    view! {
        <div aria-hidden="true" class=format!("fx-matrix {}", variant.intensity())>
            {render_layer(Layer::Front)}
            {render_layer(Layer::Back)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_layer_geometry() {
        let cols = layer_columns(Layer::Front).collect::<Vec<_>>();
        assert_eq!(cols.len(), COLUMN_COUNT);
        assert_eq!(cols[0].style(), "left: 0px; animation-duration: 3.00s; animation-delay: 0.00s");
        assert_eq!(cols[3].left_px, 108);
        assert_eq!(cols[3].style(), "left: 108px; animation-duration: 5.10s; animation-delay: -1.05s");
        // duration cycles every five columns
        assert_eq!(cols[5].duration_s, cols[0].duration_s);
    }

    #[test]
    fn test_back_layer_geometry() {
        let cols = layer_columns(Layer::Back).collect::<Vec<_>>();
        assert_eq!(cols[0].style(), "left: 0px; animation-duration: 6.40s; animation-delay: -2.00s");
        assert_eq!(cols[2].style(), "left: 72px; animation-duration: 4.00s; animation-delay: -2.80s");
        assert_eq!(cols[27].left_px, 27 * 36);
    }

    #[test]
    fn test_subtle_is_default() {
        assert_eq!(MatrixVariant::default(), MatrixVariant::Subtle);
        assert_ne!(MatrixVariant::Subtle.intensity(), MatrixVariant::Strong.intensity());
    }
}
