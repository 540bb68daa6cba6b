//! Step tables — the unit of progression.
//!
//! `METHODOLOGY_STEPS` is the strictly-ordered sequence the step cursor
//! indexes into; its order must match the methodology station placement
//! order. `SIDE_STEPS` holds the ungated steps for every other station
//! and display.

use super::items::Item;

/// Which mini-game screen a task modal shows. The content itself lives in
/// the presentation layer; the core only carries the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Quiz,
    Slideshow,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskContent {
    pub kind: TaskKind,
    pub content_id: &'static str,
}

/// One objective: inventory preconditions, a task handle, and the items
/// granted on completion. Static content — never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// The station or display this step belongs to.
    pub station_id: &'static str,
    pub objective: &'static str,
    pub task: Option<TaskContent>,
    pub required_items: &'static [Item],
    pub resulting_items: &'static [Item],
}

const fn task(kind: TaskKind, content_id: &'static str) -> Option<TaskContent> {
    Some(TaskContent { kind, content_id })
}

/// The ordered methodology sequence. `current_step_index` is a cursor into
/// this table.
static METHODOLOGY_STEPS: [Step; 6] = [
    Step {
        station_id: "extraction",
        objective: "Extract DNA from the sample",
        task: task(TaskKind::Slideshow, "extraction-protocol"),
        required_items: &[Item::DnaSample],
        resulting_items: &[Item::ExtractedDna],
    },
    Step {
        station_id: "digestion",
        objective: "Digest the DNA with restriction enzymes",
        task: task(TaskKind::Quiz, "enzyme-choice"),
        required_items: &[Item::ExtractedDna],
        resulting_items: &[Item::RestrictionFragments],
    },
    Step {
        station_id: "electrophoresis",
        objective: "Separate the fragments on a gel",
        task: task(TaskKind::Slideshow, "gel-setup"),
        required_items: &[Item::RestrictionFragments],
        resulting_items: &[Item::GelResults],
    },
    Step {
        station_id: "blotting",
        objective: "Transfer the fragments to a membrane",
        task: task(TaskKind::Table, "blot-layers"),
        required_items: &[Item::GelResults],
        resulting_items: &[Item::BlotMembrane],
    },
    Step {
        station_id: "hybridisation",
        objective: "Hybridise the labelled probe",
        task: task(TaskKind::Quiz, "probe-pairing"),
        required_items: &[Item::BlotMembrane],
        resulting_items: &[Item::HybridisedMembrane],
    },
    Step {
        station_id: "detection",
        objective: "Expose and read the autoradiograph",
        task: task(TaskKind::Slideshow, "band-reading"),
        required_items: &[Item::HybridisedMembrane],
        resulting_items: &[Item::Autoradiograph],
    },
];

/// Ungated steps for the remaining stations and displays.
static SIDE_STEPS: [Step; 10] = [
    Step {
        station_id: "sample-collection",
        objective: "Collect the case file and DNA sample",
        task: task(TaskKind::Quiz, "intake-basics"),
        required_items: &[],
        resulting_items: &[Item::CaseFile, Item::DnaSample],
    },
    Step {
        station_id: "rflp-overview",
        objective: "Read the RFLP overview",
        task: task(TaskKind::Slideshow, "rflp-overview"),
        required_items: &[],
        resulting_items: &[],
    },
    Step {
        station_id: "forensics",
        objective: "See how RFLP matches crime-scene DNA",
        task: task(TaskKind::Slideshow, "forensics-cases"),
        required_items: &[],
        resulting_items: &[],
    },
    Step {
        station_id: "paternity",
        objective: "See how band inheritance settles paternity",
        task: task(TaskKind::Slideshow, "paternity-ladders"),
        required_items: &[],
        resulting_items: &[],
    },
    Step {
        station_id: "diagnostics",
        objective: "See how RFLP flags disease alleles",
        task: task(TaskKind::Slideshow, "sickle-cell-example"),
        required_items: &[],
        resulting_items: &[],
    },
    Step {
        station_id: "conservation",
        objective: "See how RFLP maps population diversity",
        task: task(TaskKind::Slideshow, "conservation-surveys"),
        required_items: &[],
        resulting_items: &[],
    },
    Step {
        station_id: "cost",
        objective: "Weigh the cost and equipment burden",
        task: task(TaskKind::Table, "cost-comparison"),
        required_items: &[],
        resulting_items: &[],
    },
    Step {
        station_id: "labour",
        objective: "Weigh the time and labour burden",
        task: task(TaskKind::Table, "time-comparison"),
        required_items: &[],
        resulting_items: &[],
    },
    Step {
        station_id: "sample-quality",
        objective: "Understand the sample quantity problem",
        task: task(TaskKind::Slideshow, "sample-degradation"),
        required_items: &[],
        resulting_items: &[],
    },
    Step {
        station_id: "certification",
        objective: "Earn your RFLP certificate",
        task: task(TaskKind::Quiz, "final-review"),
        required_items: &[Item::Autoradiograph],
        resulting_items: &[Item::Certificate],
    },
];

/// The ordered methodology sequence.
pub fn methodology_steps() -> &'static [Step] {
    &METHODOLOGY_STEPS
}

/// Position of a station's step in the methodology sequence, if it is
/// sequence-gated at all.
pub fn methodology_step_index(station_id: &str) -> Option<usize> {
    METHODOLOGY_STEPS
        .iter()
        .position(|s| s.station_id == station_id)
}

/// The step bound to a station or display, wherever it lives.
pub fn step_for(station_id: &str) -> Option<&'static Step> {
    METHODOLOGY_STEPS
        .iter()
        .chain(SIDE_STEPS.iter())
        .find(|s| s.station_id == station_id)
}
