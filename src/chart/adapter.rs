use log::debug;

use super::dataset::ChartDataset;

/// Rendering surface consumed by the adapter. The host UI supplies an
/// implementation; the adapter only ever talks to it through this seam.
pub trait ChartSurface: Send {
    /// Create the underlying chart object. Called exactly once, lazily,
    /// before the first draw.
    fn mount(&mut self);

    /// Redraw in place with a replacement dataset.
    fn update(&mut self, dataset: &ChartDataset);
}

/// Feeds response payloads to the rendering surface.
///
/// The surface handle is created once and reused for every subsequent
/// update. Tearing the chart down and rebuilding it per query loses axis
/// and animation state and flickers visibly, so that path does not exist
/// here.
pub struct ChartAdapter {
    surface: Box<dyn ChartSurface>,
    mounted: bool,
    current: Option<ChartDataset>,
}

impl ChartAdapter {
    pub fn new(surface: Box<dyn ChartSurface>) -> Self {
        Self {
            surface,
            mounted: false,
            current: None,
        }
    }

    /// Replace the chart contents in a single update. `None` draws the
    /// empty shell shown before any data has arrived.
    pub fn render(&mut self, payload: Option<ChartDataset>) {
        if !self.mounted {
            self.surface.mount();
            self.mounted = true;
        }

        match payload {
            Some(dataset) => {
                debug!(
                    "rendering dataset: {} labels, {} series",
                    dataset.labels.len(),
                    dataset.datasets.len()
                );
                self.surface.update(&dataset);
                self.current = Some(dataset);
            }
            None => {
                self.surface.update(&ChartDataset::empty());
            }
        }
    }

    /// Last dataset handed to the surface, if any.
    pub fn current_dataset(&self) -> Option<&ChartDataset> {
        self.current.as_ref()
    }
}
