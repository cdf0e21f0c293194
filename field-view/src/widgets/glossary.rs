/// A debate term and what it means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub definition: &'static str,
}

const fn entry(term: &'static str, definition: &'static str) -> GlossaryEntry {
    GlossaryEntry { term, definition }
}

pub const GLOSSARY: &[GlossaryEntry] = &[
    entry("Motion", "The statement under debate, set before preparation begins."),
    entry("Proposition", "The side that argues in favour of the motion; also called Government."),
    entry("Opposition", "The side that argues against the motion."),
    entry("Burden of proof", "What a side must demonstrate for its case to succeed."),
    entry(
        "Point of Information",
        "A short question or remark offered to the current speaker during their speech.",
    ),
    entry("Rebuttal", "Direct engagement with and refutation of the other side's arguments."),
    entry("Clash", "The central points of disagreement between the two sides."),
    entry(
        "Extension",
        "New material that develops a team's case beyond what earlier speakers said.",
    ),
    entry("Weighing", "Comparing arguments to show why one side's case matters more."),
    entry("Framing", "How a team defines the motion and the terms on which it should be judged."),
    entry(
        "Protected time",
        "The opening and closing minute of a speech, when points of information are not allowed.",
    ),
    entry(
        "Whip speech",
        "A summary speech that organises the debate around its key clashes without adding new arguments.",
    ),
    entry("Adjudicator", "A judge who decides the result and gives feedback to the speakers."),
    entry("Signposting", "Announcing the structure of a speech so the audience can follow it."),
];

/// Entries whose term or definition contains `query`, ignoring case.
///
/// Surrounding whitespace in the query is ignored, and a blank query matches
/// everything.
pub fn filter<'a>(entries: &'a [GlossaryEntry], query: &str) -> Vec<&'a GlossaryEntry> {
    let needle = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|e| {
            needle.is_empty()
                || e.term.to_lowercase().contains(&needle)
                || e.definition.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Searchable glossary shown in a closable window.
#[derive(Debug, Default)]
pub struct GlossaryModal {
    open: bool,
    pub query: String,
}

impl GlossaryModal {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn matches(&self) -> Vec<&'static GlossaryEntry> {
        filter(GLOSSARY, &self.query)
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let mut open = self.is_open();
        let mut close_clicked = false;

        egui::Window::new("Glossary")
            .open(&mut open)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Search");
                    ui.text_edit_singleline(&mut self.query);
                });
                ui.separator();

                let matches = self.matches();
                if matches.is_empty() {
                    ui.weak("No matching terms");
                }

                egui::ScrollArea::vertical()
                    .max_height(320.0)
                    .show(ui, |ui| {
                        for e in matches {
                            ui.label(egui::RichText::new(e.term).strong());
                            ui.label(e.definition);
                            ui.add_space(6.0);
                        }
                    });

                ui.separator();
                close_clicked = ui.button("Close").clicked();
            });

        self.open = open;
        if close_clicked {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_matches_everything() {
        assert_eq!(filter(GLOSSARY, "").len(), GLOSSARY.len());
        assert_eq!(filter(GLOSSARY, "   ").len(), GLOSSARY.len());
    }

    #[test]
    fn filter_ignores_case() {
        let hits = filter(GLOSSARY, "REBUT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].term, "Rebuttal");
    }

    #[test]
    fn filter_searches_definitions_too() {
        let hits = filter(GLOSSARY, "government");
        assert!(hits.iter().any(|e| e.term == "Proposition"));
    }

    #[test]
    fn unknown_query_matches_nothing() {
        assert!(filter(GLOSSARY, "zzzz").is_empty());
    }

    #[test]
    fn open_modal_stays_open_across_frames() {
        let ctx = egui::Context::default();
        let mut modal = GlossaryModal::default();
        modal.open();
        modal.query = "motion".to_owned();

        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| modal.show(ctx));
        }

        assert!(modal.is_open());
        assert_eq!(modal.query, "motion");
    }

    #[test]
    fn modal_open_close() {
        let mut modal = GlossaryModal::default();
        assert!(!modal.is_open());

        modal.open();
        assert!(modal.is_open());

        modal.query = "clash".to_owned();
        assert_eq!(modal.matches().len(), 2);

        modal.close();
        assert!(!modal.is_open());
    }
}
