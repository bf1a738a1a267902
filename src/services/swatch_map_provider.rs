use crate::models::SwatchMap;
use harmonic_colors::{ImageSize, Rect, Rgb, Swatch, SwatchPalette, SwatchProvider, SwatchRequest};
use tracing::debug;

/// Serves swatches from a [`SwatchMap`] as if its patches had been
/// quantized from a real image.
///
/// Patches are painted in order, so a later patch hides whatever lies under
/// it. A color's population is the area where it is the top-most patch
/// inside the requested region; uncovered pixels count for nothing. Regions
/// larger than the request's resize area are scaled down to it, the same as
/// downsampling by `sqrt(resize_area / region_area)` per axis.
pub struct SwatchMapProvider {
    map: SwatchMap,
}

impl SwatchMapProvider {
    pub fn new(map: SwatchMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &SwatchMap {
        &self.map
    }

    /// Per-color visible populations inside `region`, in first-appearance
    /// order. Colors with no remaining population are dropped.
    pub fn swatches_in(&self, region: Rect, resize_area: Option<u32>) -> Vec<Swatch> {
        let visible = self.visible_areas(region);

        let region_area = region.area();
        let scale = match resize_area {
            Some(target) if region_area > u64::from(target) => target as f64 / region_area as f64,
            _ => 1.0,
        };

        visible
            .into_iter()
            .filter_map(|(color, area)| {
                let population = (area as f64 * scale).round() as u64;
                (population > 0)
                    .then(|| Swatch::new(color, u32::try_from(population).unwrap_or(u32::MAX)))
            })
            .collect()
    }

    /// Area per color where that color's patch is on top.
    ///
    /// Patch edges split the region into a grid of cells that are each
    /// either fully inside or fully outside every patch, so the top-most
    /// patch is decided once per cell.
    fn visible_areas(&self, region: Rect) -> Vec<(Rgb, u64)> {
        let clipped: Vec<(Rgb, Rect)> = self
            .map
            .patches
            .iter()
            .map(|patch| (patch.color, patch.rect.intersect(&region)))
            .filter(|(_, rect)| !rect.is_empty())
            .collect();

        let mut areas: Vec<(Rgb, u64)> = Vec::new();
        for (color, _) in &clipped {
            if !areas.iter().any(|(c, _)| c == color) {
                areas.push((*color, 0));
            }
        }

        let xs = edges(clipped.iter().flat_map(|(_, r)| [r.left, r.right]));
        let ys = edges(clipped.iter().flat_map(|(_, r)| [r.top, r.bottom]));
        for x in xs.windows(2) {
            for y in ys.windows(2) {
                let cell = Rect::new(x[0], y[0], x[1], y[1]);
                let top = clipped.iter().rev().find(|(_, rect)| covers(rect, &cell));
                if let Some((color, _)) = top {
                    if let Some((_, total)) = areas.iter_mut().find(|(c, _)| c == color) {
                        *total += cell.area();
                    }
                }
            }
        }

        areas.retain(|(_, area)| *area > 0);
        areas
    }
}

fn edges(coords: impl Iterator<Item = u32>) -> Vec<u32> {
    let mut edges: Vec<u32> = coords.collect();
    edges.sort_unstable();
    edges.dedup();
    edges
}

fn covers(outer: &Rect, inner: &Rect) -> bool {
    outer.left <= inner.left
        && outer.top <= inner.top
        && outer.right >= inner.right
        && outer.bottom >= inner.bottom
}

impl SwatchProvider for SwatchMapProvider {
    fn image_size(&self) -> ImageSize {
        self.map.size()
    }

    fn generate(&self, request: &SwatchRequest) -> SwatchPalette {
        let bounds = self.map.size().bounds();
        let region = request.region.map_or(bounds, |rect| rect.intersect(&bounds));
        let swatches = self.swatches_in(region, request.resize_area);
        debug!(
            %region,
            resize_area = ?request.resize_area,
            filters = request.filters.len(),
            colors = swatches.len(),
            "generating swatches"
        );
        SwatchPalette::filtered(swatches, &request.filters)
    }
}
