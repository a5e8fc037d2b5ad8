//! Responsive grid layout of the dashboard panels.
//!
//! Each breakpoint holds an ordered list of panel placements on a 12-column
//! grid. Placements are cosmetic and live for the page session only.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of grid columns at every breakpoint.
pub const GRID_COLUMNS: u32 = 12;
/// Height of one grid row in pixels.
pub const ROW_HEIGHT_PX: u32 = 40;
/// Horizontal and vertical gap between panels in pixels.
pub const MARGIN_PX: u32 = 16;
/// Default panel height in rows.
const PANEL_ROWS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Lg,
    Md,
    Sm,
    Xs,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 4] = [Breakpoint::Lg, Breakpoint::Md, Breakpoint::Sm, Breakpoint::Xs];

    /// Minimum viewport width (px) for this breakpoint.
    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::Lg => 1200,
            Breakpoint::Md => 996,
            Breakpoint::Sm => 768,
            Breakpoint::Xs => 480,
        }
    }

    /// Pick the breakpoint for a viewport width. Anything narrower than `sm`
    /// is `xs`.
    pub fn for_width(width: u32) -> Self {
        [Breakpoint::Lg, Breakpoint::Md, Breakpoint::Sm]
            .into_iter()
            .find(|bp| width >= bp.min_width())
            .unwrap_or(Breakpoint::Xs)
    }

    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::Lg => "lg",
            Breakpoint::Md => "md",
            Breakpoint::Sm => "sm",
            Breakpoint::Xs => "xs",
        }
    }
}

/// Dashboard panels that take part in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    Market,
    Branding,
    Outreach,
    Pricing,
    Budgeting,
}

impl PanelId {
    pub const ALL: [PanelId; 5] = [
        PanelId::Market,
        PanelId::Branding,
        PanelId::Outreach,
        PanelId::Pricing,
        PanelId::Budgeting,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PanelId::Market => "Market Analysis",
            PanelId::Branding => "Branding",
            PanelId::Outreach => "Outreach",
            PanelId::Pricing => "Pricing Strategy",
            PanelId::Budgeting => "Budgeting & Financial Planning",
        }
    }
}

/// Position and size of one panel, in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub id: PanelId,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Placement {
    /// CSS grid placement (grid lines are 1-based).
    pub fn overlaps(&self, other: &Placement) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    pub fn grid_style(&self) -> String {
        format!(
            "grid-column: {} / span {}; grid-row: {} / span {};",
            self.x + 1,
            self.w,
            self.y + 1,
            self.h
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    layouts: BTreeMap<Breakpoint, Vec<Placement>>,
}

impl Default for LayoutState {
    fn default() -> Self {
        let mut layouts = BTreeMap::new();
        for bp in Breakpoint::ALL {
            layouts.insert(bp, default_placements(bp));
        }
        Self { layouts }
    }
}

fn default_placements(bp: Breakpoint) -> Vec<Placement> {
    let two_columns = matches!(bp, Breakpoint::Lg | Breakpoint::Md);
    PanelId::ALL
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            let i = i as u32;
            if two_columns {
                Placement {
                    id,
                    x: (i % 2) * 6,
                    y: (i / 2) * PANEL_ROWS,
                    w: 6,
                    h: PANEL_ROWS,
                }
            } else {
                Placement {
                    id,
                    x: 0,
                    y: i * PANEL_ROWS,
                    w: GRID_COLUMNS,
                    h: PANEL_ROWS,
                }
            }
        })
        .collect()
}

impl LayoutState {
    pub fn panels(&self, bp: Breakpoint) -> &[Placement] {
        self.layouts.get(&bp).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn placement(&self, bp: Breakpoint, id: PanelId) -> Option<&Placement> {
        self.panels(bp).iter().find(|p| p.id == id)
    }

    fn placement_mut(&mut self, bp: Breakpoint, id: PanelId) -> anyhow::Result<&mut Placement> {
        self.layouts
            .get_mut(&bp)
            .and_then(|list| list.iter_mut().find(|p| p.id == id))
            .ok_or_else(|| anyhow::anyhow!("panel {:?} is not laid out at {}", id, bp.name()))
    }

    /// Move a panel. `x` is clamped so the panel stays inside the grid.
    pub fn move_panel(&mut self, bp: Breakpoint, id: PanelId, x: u32, y: u32) -> anyhow::Result<()> {
        let placement = self.placement_mut(bp, id)?;
        placement.x = x.min(GRID_COLUMNS - placement.w);
        placement.y = y;
        self.push_down(bp, &[id]);
        Ok(())
    }

    /// Resize a panel. Width is clamped to `[1, 12]` and the panel is shifted
    /// left if it would overflow; height is at least one row.
    pub fn resize_panel(&mut self, bp: Breakpoint, id: PanelId, w: u32, h: u32) -> anyhow::Result<()> {
        let placement = self.placement_mut(bp, id)?;
        placement.w = w.clamp(1, GRID_COLUMNS);
        placement.h = h.max(1);
        if placement.x + placement.w > GRID_COLUMNS {
            placement.x = GRID_COLUMNS - placement.w;
        }
        self.push_down(bp, &[id]);
        Ok(())
    }

    /// Exchange the positions (not sizes) of two panels.
    pub fn swap(&mut self, bp: Breakpoint, a: PanelId, b: PanelId) -> anyhow::Result<()> {
        if a == b {
            return Ok(());
        }
        let pa = *self.placement_mut(bp, a)?;
        let pb = *self.placement_mut(bp, b)?;
        {
            let first = self.placement_mut(bp, a)?;
            first.x = pb.x.min(GRID_COLUMNS - first.w);
            first.y = pb.y;
        }
        let second = self.placement_mut(bp, b)?;
        second.x = pa.x.min(GRID_COLUMNS - second.w);
        second.y = pa.y;
        self.push_down(bp, &[a, b]);
        Ok(())
    }

    /// Push panels that collide with the edited ones further down the grid.
    ///
    /// `anchors` keep their place (the first one wins if they collide with
    /// each other); every other panel is placed in reading order and moved
    /// below whatever it hits, so no two placements intersect afterwards.
    fn push_down(&mut self, bp: Breakpoint, anchors: &[PanelId]) {
        let Some(list) = self.layouts.get_mut(&bp) else {
            return;
        };
        let mut order: Vec<usize> = (0..list.len()).collect();
        order.sort_by_key(|&i| {
            let p = &list[i];
            let anchor = anchors.iter().position(|id| *id == p.id).unwrap_or(anchors.len());
            (anchor, p.y, p.x)
        });

        let mut placed: Vec<Placement> = Vec::with_capacity(list.len());
        for i in order {
            let mut p = list[i];
            while let Some(hit) = placed.iter().find(|q| q.overlaps(&p)) {
                p.y = hit.y + hit.h;
            }
            list[i] = p;
            placed.push(p);
        }
    }

    /// Panels in reading order (top to bottom, left to right).
    pub fn ordered(&self, bp: Breakpoint) -> Vec<Placement> {
        let mut list = self.panels(bp).to_vec();
        list.sort_by_key(|p| (p.y, p.x));
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_breakpoint_for_width() {
        assert_eq!(Breakpoint::for_width(1440), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(1200), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(1000), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(800), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(500), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(320), Breakpoint::Xs);
    }

    #[test]
    fn test_default_layouts_have_unique_ids() {
        let layout = LayoutState::default();
        for bp in Breakpoint::ALL {
            let ids: HashSet<PanelId> = layout.panels(bp).iter().map(|p| p.id).collect();
            assert_eq!(ids.len(), PanelId::ALL.len(), "{}", bp.name());
        }
    }

    #[test]
    fn test_default_large_is_two_columns() {
        let layout = LayoutState::default();
        let branding = layout.placement(Breakpoint::Lg, PanelId::Branding).unwrap();
        assert_eq!((branding.x, branding.y, branding.w, branding.h), (6, 0, 6, 8));
        let outreach = layout.placement(Breakpoint::Lg, PanelId::Outreach).unwrap();
        assert_eq!((outreach.x, outreach.y), (0, 8));

        let small = layout.placement(Breakpoint::Sm, PanelId::Pricing).unwrap();
        assert_eq!((small.x, small.y, small.w), (0, 24, 12));
    }

    #[test]
    fn test_resize_clamps_to_grid() {
        let mut layout = LayoutState::default();
        layout.resize_panel(Breakpoint::Lg, PanelId::Branding, 40, 0).unwrap();
        let p = layout.placement(Breakpoint::Lg, PanelId::Branding).unwrap();
        assert_eq!((p.x, p.w, p.h), (0, 12, 1));
    }

    fn first_overlap(layout: &LayoutState, bp: Breakpoint) -> Option<(PanelId, PanelId)> {
        let panels = layout.panels(bp);
        for (i, a) in panels.iter().enumerate() {
            for b in &panels[i + 1..] {
                if a.overlaps(b) {
                    return Some((a.id, b.id));
                }
            }
        }
        None
    }

    #[test]
    fn test_edits_never_overlap() {
        let mut layout = LayoutState::default();

        layout.resize_panel(Breakpoint::Lg, PanelId::Branding, 12, 8).unwrap();
        assert_eq!(first_overlap(&layout, Breakpoint::Lg), None);
        let branding = layout.placement(Breakpoint::Lg, PanelId::Branding).unwrap();
        assert_eq!((branding.x, branding.y), (0, 0));
        let market = layout.placement(Breakpoint::Lg, PanelId::Market).unwrap();
        assert_eq!(market.y, 8);

        layout.resize_panel(Breakpoint::Lg, PanelId::Budgeting, 12, 8).unwrap();
        layout.swap(Breakpoint::Lg, PanelId::Budgeting, PanelId::Pricing).unwrap();
        assert_eq!(first_overlap(&layout, Breakpoint::Lg), None);

        layout.move_panel(Breakpoint::Lg, PanelId::Outreach, 3, 2).unwrap();
        assert_eq!(first_overlap(&layout, Breakpoint::Lg), None);
        let outreach = layout.placement(Breakpoint::Lg, PanelId::Outreach).unwrap();
        assert_eq!((outreach.x, outreach.y), (3, 2));

        layout.resize_panel(Breakpoint::Md, PanelId::Market, 7, 3).unwrap();
        layout.swap(Breakpoint::Md, PanelId::Market, PanelId::Branding).unwrap();
        assert_eq!(first_overlap(&layout, Breakpoint::Md), None);

        let ids: HashSet<PanelId> = layout.panels(Breakpoint::Lg).iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PanelId::ALL.len());
    }

    #[test]
    fn test_move_clamps_x() {
        let mut layout = LayoutState::default();
        layout.move_panel(Breakpoint::Md, PanelId::Market, 11, 3).unwrap();
        let p = layout.placement(Breakpoint::Md, PanelId::Market).unwrap();
        assert_eq!((p.x, p.y), (6, 3));
    }

    #[test]
    fn test_swap_exchanges_positions() {
        let mut layout = LayoutState::default();
        layout.swap(Breakpoint::Lg, PanelId::Market, PanelId::Pricing).unwrap();
        let order: Vec<PanelId> = layout.ordered(Breakpoint::Lg).iter().map(|p| p.id).collect();
        assert_eq!(
            order,
            vec![
                PanelId::Pricing,
                PanelId::Branding,
                PanelId::Outreach,
                PanelId::Market,
                PanelId::Budgeting
            ]
        );
    }

    #[test]
    fn test_grid_style() {
        let p = Placement { id: PanelId::Market, x: 6, y: 8, w: 6, h: 8 };
        assert_eq!(p.grid_style(), "grid-column: 7 / span 6; grid-row: 9 / span 8;");
    }
}
