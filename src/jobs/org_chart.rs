//! Admin dashboard module hierarchy job.

use super::{JobError, JobReport, RunConfig};
use crate::charts::palette::{
    BRICK, CORAL_RED, DEEP_TEAL, MULBERRY, MUSTARD, OFF_WHITE, RUST, SEA_GREEN, SLATE, TEAL,
};
use crate::charts::{HierarchyScene, Level, StaticChartRenderer};
use plotters::style::RGBColor;

const ROOT: &str = "Admin Dashboard";

const MODULES: [(&str, f64, f64, RGBColor); 8] = [
    ("User Management", -3.0, 2.0, CORAL_RED),
    ("Content Moderation", -1.0, 2.0, SEA_GREEN),
    ("Payment & Subs", 1.0, 2.0, SLATE),
    ("System Controls", 3.0, 2.0, MUSTARD),
    ("Comm Center", -3.0, -2.0, BRICK),
    ("Data & Backups", -1.0, -2.0, RUST),
    ("Analytics", 1.0, -2.0, MULBERRY),
    ("Admin Mgmt", 3.0, -2.0, DEEP_TEAL),
];

/// Feature label, position and owning module.
const FEATURES: [(&str, f64, f64, &str); 17] = [
    ("View Users", -4.0, 3.5, "User Management"),
    ("Suspend/Ban", -3.0, 3.5, "User Management"),
    ("Edit Profiles", -2.0, 3.5, "User Management"),
    ("Job Queue", -1.5, 3.5, "Content Moderation"),
    ("Review Queue", -0.5, 3.5, "Content Moderation"),
    ("Transactions", 0.5, 3.5, "Payment & Subs"),
    ("Manage Plans", 1.5, 3.5, "Payment & Subs"),
    ("Maintenance", 2.5, 3.5, "System Controls"),
    ("Feature Toggle", 3.5, 3.5, "System Controls"),
    ("Email Templates", -3.5, -3.5, "Comm Center"),
    ("Broadcast", -2.5, -3.5, "Comm Center"),
    ("Create Backup", -1.5, -3.5, "Data & Backups"),
    ("Export Data", -0.5, -3.5, "Data & Backups"),
    ("Real-time Dash", 0.5, -3.5, "Analytics"),
    ("Custom Reports", 1.5, -3.5, "Analytics"),
    ("Roles", 2.5, -3.5, "Admin Mgmt"),
    ("Audit Logs", 3.5, -3.5, "Admin Mgmt"),
];

/// Root, the eight modules and their features.
pub fn org_chart_scene() -> HierarchyScene {
    let mut scene = HierarchyScene::new("Eduhire Admin Dashboard Modules")
        .with_caption(
            "Admin Dashboard hierarchical structure with main modules and sub-features",
            0.0,
            -4.5,
        )
        .node(ROOT, Level::Root, 0.0, 0.0, TEAL);

    for (label, x, y, color) in MODULES {
        scene = scene.node(label, Level::Module, x, y, color);
    }
    for (label, x, y, _) in FEATURES {
        scene = scene.node(label, Level::Feature, x, y, OFF_WHITE);
    }

    for (module, ..) in MODULES {
        scene = scene.edge(ROOT, module);
    }
    for (feature, _, _, module) in FEATURES {
        scene = scene.edge(module, feature);
    }
    scene
}

pub(super) fn run(config: &RunConfig) -> Result<JobReport, JobError> {
    render(&org_chart_scene(), config)
}

fn render(scene: &HierarchyScene, config: &RunConfig) -> Result<JobReport, JobError> {
    // Resolve first: a dangling edge must fail before any file exists
    let figure = scene.resolve()?;
    let files = StaticChartRenderer::export(
        &figure,
        &config.path("admin_dashboard_org_chart.png"),
        &config.path("admin_dashboard_org_chart.svg"),
    )?;

    Ok(JobReport {
        job: "org-chart",
        files,
        lines: vec![
            "Chart saved successfully as admin_dashboard_org_chart.png and admin_dashboard_org_chart.svg"
                .to_string(),
        ],
    })
}
