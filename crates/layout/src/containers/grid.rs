use super::{child_margin_sizes, log_degenerate, resolve_axis};
use crate::LayoutError;
use crate::element::{GridSpec, LayoutRole};
use crate::interface::LayoutStrategy;
use crate::tree::ElementTree;
use figura_style::{BoxLayer, Extent};
use figura_types::{ElementId, Point, Size};

/// Column widths and row heights of a grid's content box.
#[derive(Debug, Clone, PartialEq)]
struct Tracks {
    columns: Vec<f32>,
    rows: Vec<f32>,
}

impl Tracks {
    fn extent(tracks: &[f32], gap: f32) -> f32 {
        tracks.iter().sum::<f32>() + gap * tracks.len().saturating_sub(1) as f32
    }

    /// Start of each track along its axis.
    fn starts(tracks: &[f32], gap: f32) -> Vec<f32> {
        let mut cursor = 0.0;
        tracks
            .iter()
            .map(|t| {
                let start = cursor;
                cursor += t + gap;
                start
            })
            .collect()
    }
}

impl GridSpec {
    fn row_count(&self, children: usize) -> usize {
        children.div_ceil(self.columns.max(1))
    }

    /// Track sizes for one axis.
    ///
    /// Auto axes size each track to its largest item and only count tracks
    /// that hold at least one child. Fixed axes split the content length
    /// evenly over every track.
    fn axis_tracks(
        extent: Extent,
        count: usize,
        gap: f32,
        content: Option<f32>,
        items: impl Iterator<Item = (usize, f32)>,
    ) -> Vec<f32> {
        match (extent, content) {
            (Extent::Fixed(_), Some(content)) if count > 0 => {
                let share = ((content - gap * (count - 1) as f32) / count as f32).max(0.0);
                vec![share; count]
            }
            _ => {
                let mut tracks = vec![0.0f32; count];
                for (track, len) in items {
                    if let Some(t) = tracks.get_mut(track) {
                        *t = t.max(len);
                    }
                }
                tracks
            }
        }
    }

    fn tracks(
        &self,
        tree: &ElementTree,
        id: ElementId,
        sizes: &[(ElementId, Size)],
    ) -> Result<Tracks, LayoutError> {
        let insets = tree.get(id)?.box_model().content_insets();
        let columns = self.columns.max(1);
        let used_columns = match self.width {
            Extent::Fixed(_) => columns,
            Extent::Auto => columns.min(sizes.len()),
        };
        let rows = self.row_count(sizes.len());

        let content_w = self.width.fixed().map(|w| w - insets.horizontal());
        let content_h = self.height.fixed().map(|h| h - insets.vertical());

        let column_tracks = Self::axis_tracks(
            self.width,
            used_columns,
            self.column_gap,
            content_w,
            sizes.iter().enumerate().map(|(i, (_, s))| (i % columns, s.width)),
        );
        let row_tracks = Self::axis_tracks(
            self.height,
            rows,
            self.row_gap,
            content_h,
            sizes.iter().enumerate().map(|(i, (_, s))| (i / columns, s.height)),
        );
        Ok(Tracks {
            columns: column_tracks,
            rows: row_tracks,
        })
    }

    fn border_size(
        &self,
        tree: &ElementTree,
        id: ElementId,
        tracks: &Tracks,
    ) -> Result<Size, LayoutError> {
        let insets = tree.get(id)?.box_model().content_insets();
        Ok(Size::new(
            resolve_axis(
                self.width,
                Tracks::extent(&tracks.columns, self.column_gap),
                insets.horizontal(),
            ),
            resolve_axis(
                self.height,
                Tracks::extent(&tracks.rows, self.row_gap),
                insets.vertical(),
            ),
        ))
    }
}

impl LayoutStrategy for GridSpec {
    fn role(&self) -> LayoutRole {
        LayoutRole::Proactive
    }

    fn measure(&self, tree: &ElementTree, id: ElementId) -> Result<Size, LayoutError> {
        let sizes = child_margin_sizes(tree, id)?;
        let tracks = self.tracks(tree, id, &sizes)?;
        self.border_size(tree, id, &tracks)
    }

    fn layout(&self, tree: &mut ElementTree, id: ElementId) -> Result<Size, LayoutError> {
        if self.columns == 0 {
            return Err(LayoutError::EmptyGrid);
        }
        log_degenerate(tree, id, (self.width, self.height));
        let sizes = child_margin_sizes(tree, id)?;
        let tracks = self.tracks(tree, id, &sizes)?;
        let size = self.border_size(tree, id, &tracks)?;

        let origin = tree.box_offset(id, BoxLayer::Content)?;
        let column_starts = Tracks::starts(&tracks.columns, self.column_gap);
        let row_starts = Tracks::starts(&tracks.rows, self.row_gap);

        for (index, (child, child_size)) in sizes.into_iter().enumerate() {
            let (column, row) = (index % self.columns, index / self.columns);
            let (Some(x), Some(y)) = (column_starts.get(column), row_starts.get(row)) else {
                continue;
            };
            let cell_w = tracks.columns[column];
            let cell_h = tracks.rows[row];
            let local = Point::new(
                x + self.horizontal.offset(cell_w, child_size.width),
                y + self.vertical.offset(cell_h, child_size.height),
            );
            tree.get_mut(child)?.offset = origin + local;
        }
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use crate::element::{ElementKind, GridSpec};
    use crate::test_utils::*;
    use crate::tree::ElementTree;
    use crate::LayoutError;
    use figura_style::{Alignment, BoxModel};
    use figura_types::{Point, Size};

    #[test]
    fn auto_tracks_fit_largest_items() {
        let mut tree = ElementTree::new();
        let g = grid(&mut tree, GridSpec::new(2).gaps(5.0, 5.0));
        let a = rect(&mut tree, 10.0, 10.0);
        let b = rect(&mut tree, 30.0, 20.0);
        let c = rect(&mut tree, 20.0, 5.0);
        attach(&mut tree, g, &[a, b, c]);

        run(&mut tree, g, &CountingMeasurer::new());

        assert_eq!(tree.get(g).unwrap().size(), Size::new(55.0, 30.0));
        assert_eq!(tree.get(a).unwrap().offset(), Point::new(0.0, 0.0));
        assert_eq!(tree.get(b).unwrap().offset(), Point::new(25.0, 0.0));
        assert_eq!(tree.get(c).unwrap().offset(), Point::new(0.0, 25.0));
    }

    #[test]
    fn items_align_within_cells() {
        let mut tree = ElementTree::new();
        let g = grid(
            &mut tree,
            GridSpec::new(2).align(Alignment::Center, Alignment::End),
        );
        let a = rect(&mut tree, 10.0, 10.0);
        let b = rect(&mut tree, 30.0, 20.0);
        let c = rect(&mut tree, 20.0, 5.0);
        attach(&mut tree, g, &[a, b, c]);

        run(&mut tree, g, &CountingMeasurer::new());

        assert_eq!(tree.get(a).unwrap().offset(), Point::new(5.0, 10.0));
        assert_eq!(tree.get(c).unwrap().offset(), Point::new(0.0, 20.0));
    }

    #[test]
    fn unused_columns_do_not_count_when_auto() {
        let mut tree = ElementTree::new();
        let g = grid(&mut tree, GridSpec::new(3).gaps(4.0, 0.0));
        let a = rect(&mut tree, 10.0, 10.0);
        let b = rect(&mut tree, 20.0, 10.0);
        attach(&mut tree, g, &[a, b]);

        run(&mut tree, g, &CountingMeasurer::new());

        assert_eq!(tree.get(g).unwrap().size(), Size::new(34.0, 10.0));
    }

    #[test]
    fn fixed_width_shares_columns_evenly() {
        let mut tree = ElementTree::new();
        let g = grid(&mut tree, GridSpec::new(3).gaps(5.0, 0.0).width(100.0));
        let cells: Vec<_> = (0..4).map(|_| rect(&mut tree, 10.0, 10.0)).collect();
        attach(&mut tree, g, &cells);

        run(&mut tree, g, &CountingMeasurer::new());

        assert_eq!(tree.get(g).unwrap().size(), Size::new(100.0, 20.0));
        assert_eq!(tree.get(cells[1]).unwrap().offset(), Point::new(35.0, 0.0));
        assert_eq!(tree.get(cells[2]).unwrap().offset(), Point::new(70.0, 0.0));
        assert_eq!(tree.get(cells[3]).unwrap().offset(), Point::new(0.0, 10.0));
    }

    #[test]
    fn zero_columns_is_rejected() {
        let mut tree = ElementTree::new();
        assert_eq!(
            tree.insert(ElementKind::Grid(GridSpec::new(0)), BoxModel::none()),
            Err(LayoutError::EmptyGrid)
        );
    }
}
