use std::collections::BTreeSet;

use crate::config::HEADER_OFFSET_PX;

/// Scrollable regions of the page. Declaration order is the priority order
/// used when more than one section contains the scroll cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Home,
    Servicos,
    Habilidades,
    Projetos,
    Sobre,
    Contato,
    Recomendacoes,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::Servicos,
        SectionId::Habilidades,
        SectionId::Projetos,
        SectionId::Sobre,
        SectionId::Contato,
        SectionId::Recomendacoes,
    ];

    /// Entries of the jump-navigation menu. `Home` is reached through the logo.
    pub const NAV: [SectionId; 6] = [
        SectionId::Servicos,
        SectionId::Habilidades,
        SectionId::Sobre,
        SectionId::Projetos,
        SectionId::Contato,
        SectionId::Recomendacoes,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Servicos => "servicos",
            SectionId::Habilidades => "habilidades",
            SectionId::Projetos => "projetos",
            SectionId::Sobre => "sobre",
            SectionId::Contato => "contato",
            SectionId::Recomendacoes => "recomendacoes",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.dom_id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "INÍCIO",
            SectionId::Servicos => "SERVIÇOS",
            SectionId::Habilidades => "HABILIDADES",
            SectionId::Projetos => "PROJETOS",
            SectionId::Sobre => "SOBRE",
            SectionId::Contato => "CONTATO",
            SectionId::Recomendacoes => "RECOMENDAÇÕES",
        }
    }
}

/// Layout box of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SectionBounds {
    /// Lower bound inclusive, upper bound exclusive.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset_top && position < self.offset_top + self.offset_height
    }
}

/// First section (in slice order) whose box contains `scroll_y` plus the
/// header offset. Keeps `previous` when nothing matches.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds], previous: SectionId) -> SectionId {
    let position = scroll_y + HEADER_OFFSET_PX;
    sections
        .iter()
        .find(|bounds| bounds.contains(position))
        .map(|bounds| bounds.id)
        .unwrap_or(previous)
}

/// Top and bottom root-margin insets, in px, that shrink a viewport of
/// `viewport_height` to the one pixel line at the header offset. They depend
/// on the viewport height, so the observer using them must be rebuilt
/// whenever the window is resized.
pub fn cursor_line_insets(viewport_height: f64) -> (f64, f64) {
    let bottom = (viewport_height - HEADER_OFFSET_PX - 1.0).max(0.0);
    (HEADER_OFFSET_PX, bottom)
}

/// Active-section state fed by intersection notifications.
///
/// The observer reports which sections currently cross the line at the
/// header offset; only those get measured when resolving, so no work
/// happens per scroll tick.
#[derive(Debug)]
pub struct ActiveSectionTracker {
    active: SectionId,
    crossing: BTreeSet<SectionId>,
}

impl ActiveSectionTracker {
    pub fn new(initial: SectionId) -> Self {
        Self {
            active: initial,
            crossing: BTreeSet::new(),
        }
    }

    #[cfg(test)]
    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn mark(&mut self, id: SectionId, crossing: bool) {
        if crossing {
            self.crossing.insert(id);
        } else {
            self.crossing.remove(&id);
        }
    }

    /// Full scan used once on mount, before any notification arrived.
    pub fn seed<F>(&mut self, scroll_y: f64, measure: F) -> SectionId
    where
        F: Fn(SectionId) -> Option<SectionBounds>,
    {
        let position = scroll_y + HEADER_OFFSET_PX;
        self.crossing = SectionId::ALL
            .into_iter()
            .filter(|&id| measure(id).map_or(false, |bounds| bounds.contains(position)))
            .collect();
        self.resolve(scroll_y, measure)
    }

    pub fn resolve<F>(&mut self, scroll_y: f64, measure: F) -> SectionId
    where
        F: Fn(SectionId) -> Option<SectionBounds>,
    {
        let candidates: Vec<SectionBounds> =
            self.crossing.iter().filter_map(|&id| measure(id)).collect();
        self.active = active_section(scroll_y, &candidates, self.active);
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layout() -> Vec<SectionBounds> {
        // Page order differs from priority order on purpose.
        let order = [
            (SectionId::Home, 800.0),
            (SectionId::Servicos, 600.0),
            (SectionId::Recomendacoes, 500.0),
            (SectionId::Habilidades, 700.0),
            (SectionId::Projetos, 900.0),
            (SectionId::Sobre, 600.0),
            (SectionId::Contato, 700.0),
        ];
        let mut top = 64.0;
        order
            .into_iter()
            .map(|(id, height)| {
                let bounds = SectionBounds { id, offset_top: top, offset_height: height };
                top += height;
                bounds
            })
            .collect()
    }

    fn bounds_of(id: SectionId) -> SectionBounds {
        layout().into_iter().find(|b| b.id == id).unwrap()
    }

    fn prioritised(layout: &[SectionBounds]) -> Vec<SectionBounds> {
        let mut sorted = layout.to_vec();
        sorted.sort_by_key(|b| b.id);
        sorted
    }

    #[test]
    fn dom_ids_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_dom_id(id.dom_id()), Some(id));
        }
        assert_eq!(SectionId::from_dom_id("contact"), None);
    }

    #[test]
    fn boundary_selects_the_lower_section() {
        let sections = prioritised(&layout());
        let servicos = bounds_of(SectionId::Servicos);
        let scroll_y = servicos.offset_top - HEADER_OFFSET_PX;

        assert_eq!(active_section(scroll_y, &sections, SectionId::Home), SectionId::Servicos);
        assert_eq!(active_section(scroll_y - 1.0, &sections, SectionId::Servicos), SectionId::Home);
    }

    #[test]
    fn retains_previous_outside_every_section() {
        let sections = prioritised(&layout());
        assert_eq!(active_section(-500.0, &sections, SectionId::Sobre), SectionId::Sobre);
        assert_eq!(active_section(100_000.0, &sections, SectionId::Contato), SectionId::Contato);
    }

    #[test]
    fn first_listed_wins_on_overlap() {
        let sections = [
            SectionBounds { id: SectionId::Projetos, offset_top: 0.0, offset_height: 500.0 },
            SectionBounds { id: SectionId::Sobre, offset_top: 0.0, offset_height: 500.0 },
        ];
        assert_eq!(active_section(0.0, &sections, SectionId::Home), SectionId::Projetos);
    }

    #[test]
    fn zero_height_section_never_matches() {
        let sections = [
            SectionBounds { id: SectionId::Servicos, offset_top: 300.0, offset_height: 0.0 },
            SectionBounds { id: SectionId::Habilidades, offset_top: 300.0, offset_height: 400.0 },
        ];
        assert_eq!(active_section(200.0, &sections, SectionId::Home), SectionId::Habilidades);
    }

    #[test]
    fn seed_matches_a_full_scan() {
        let measure = |id| Some(bounds_of(id));
        let sections = prioritised(&layout());
        for scroll_y in [0.0, 700.0, 1_500.0, 2_100.0, 3_000.0, 4_000.0] {
            let mut tracker = ActiveSectionTracker::new(SectionId::Home);
            assert_eq!(
                tracker.seed(scroll_y, measure),
                active_section(scroll_y, &sections, SectionId::Home),
                "scroll_y = {scroll_y}"
            );
        }
    }

    #[test]
    fn resolves_only_crossing_sections() {
        let measure = |id| Some(bounds_of(id));
        let mut tracker = ActiveSectionTracker::new(SectionId::Home);
        let projetos = bounds_of(SectionId::Projetos);
        let scroll_y = projetos.offset_top + 10.0 - HEADER_OFFSET_PX;

        // No notification yet: nothing crosses, previous value holds.
        assert_eq!(tracker.resolve(scroll_y, measure), SectionId::Home);

        tracker.mark(SectionId::Projetos, true);
        assert_eq!(tracker.resolve(scroll_y, measure), SectionId::Projetos);

        tracker.mark(SectionId::Projetos, false);
        assert_eq!(tracker.resolve(scroll_y, measure), SectionId::Projetos);
    }

    #[test]
    fn cursor_line_is_one_pixel_for_every_viewport() {
        for viewport_height in [900.0, 800.0, 1_200.0, 568.0] {
            let (top, bottom) = cursor_line_insets(viewport_height);
            assert_eq!(top, HEADER_OFFSET_PX);
            assert_eq!(viewport_height - top - bottom, 1.0, "viewport_height = {viewport_height}");
        }
    }

    #[test]
    fn insets_from_a_taller_viewport_leave_no_line_after_shrinking() {
        let (top, bottom) = cursor_line_insets(900.0);
        assert!(800.0 - top - bottom <= 0.0);

        let (top, bottom) = cursor_line_insets(800.0);
        assert_eq!(800.0 - top - bottom, 1.0);
    }

    #[test]
    fn seed_after_rebuild_picks_the_section_under_the_cursor() {
        let measure = |id| Some(bounds_of(id));
        let mut tracker = ActiveSectionTracker::new(SectionId::Home);
        tracker.mark(SectionId::Home, true);
        assert_eq!(tracker.resolve(0.0, measure), SectionId::Home);

        // A resize rebuilds the observer, which starts over from a full scan.
        let habilidades = bounds_of(SectionId::Habilidades);
        let scroll_y = habilidades.offset_top - HEADER_OFFSET_PX;
        let mut rebuilt = ActiveSectionTracker::new(tracker.active());
        assert_eq!(rebuilt.seed(scroll_y, measure), SectionId::Habilidades);
    }

    #[test]
    fn unmeasurable_section_is_skipped() {
        let mut tracker = ActiveSectionTracker::new(SectionId::Home);
        tracker.mark(SectionId::Contato, true);
        let active = tracker.resolve(0.0, |id| if id == SectionId::Contato { None } else { Some(bounds_of(id)) });
        assert_eq!(active, SectionId::Home);
    }
}
