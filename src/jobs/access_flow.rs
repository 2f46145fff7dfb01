//! Admin access control flowchart job.

use super::{JobError, JobReport, RunConfig};
use crate::charts::{FlowScene, NodeKind, StaticChartRenderer};
use crate::charts::NodeKind::{Decision, Error, Process};

const NODES: [(&str, f64, f64, NodeKind); 16] = [
    ("Admin Login", 0.5, 0.95, Process),
    ("JWT Auth", 0.5, 0.85, Process),
    ("2FA Enabled?", 0.5, 0.75, Decision),
    ("Verify 2FA", 0.7, 0.65, Process),
    ("Verify Role", 0.5, 0.55, Process),
    ("Role Valid?", 0.5, 0.45, Decision),
    ("Load Dashboard", 0.5, 0.35, Process),
    ("Access Denied", 0.8, 0.45, Error),
    ("Admin Action", 0.5, 0.25, Process),
    ("Check Perm", 0.5, 0.15, Decision),
    ("Execute Act", 0.3, 0.05, Process),
    ("Show Error", 0.8, 0.15, Error),
    ("Log Audit", 0.3, -0.05, Process),
    ("Continue Sess", 0.5, -0.15, Process),
    ("30 Min TO?", 0.5, -0.25, Decision),
    ("Session Exp", 0.8, -0.25, Error),
];

// Raw connector segments; endpoints sit on shape borders, not node centres.
const EDGES: [((f64, f64), (f64, f64)); 20] = [
    ((0.5, 0.92), (0.5, 0.88)),
    ((0.5, 0.82), (0.5, 0.78)),
    ((0.56, 0.75), (0.64, 0.68)),
    ((0.7, 0.62), (0.5, 0.58)),
    ((0.44, 0.75), (0.5, 0.58)),
    ((0.5, 0.52), (0.5, 0.48)),
    ((0.5, 0.42), (0.5, 0.38)),
    ((0.56, 0.45), (0.74, 0.45)),
    ((0.5, 0.32), (0.5, 0.28)),
    ((0.5, 0.22), (0.5, 0.18)),
    ((0.44, 0.15), (0.36, 0.08)),
    ((0.56, 0.15), (0.74, 0.15)),
    ((0.3, 0.02), (0.3, -0.02)),
    ((0.3, -0.08), (0.44, -0.15)),
    ((0.5, -0.18), (0.5, -0.22)),
    ((0.56, -0.25), (0.74, -0.25)),
    ((0.8, 0.42), (0.56, 0.92)),
    ((0.8, 0.12), (0.5, 0.22)),
    ((0.8, -0.28), (0.56, 0.92)),
    ((0.44, -0.25), (0.5, 0.22)),
];

const EDGE_LABELS: [(f64, f64, &str); 8] = [
    (0.62, 0.7, "Yes"),
    (0.42, 0.65, "No"),
    (0.5, 0.4, "Yes"),
    (0.65, 0.45, "No"),
    (0.38, 0.12, "Allow"),
    (0.65, 0.15, "Deny"),
    (0.65, -0.25, "Yes"),
    (0.42, -0.22, "No"),
];

/// Login, role check, permission check and session timeout flow.
pub fn access_flow_scene() -> FlowScene {
    let scene = FlowScene::new("Eduhire Admin Access Control Flow", 0.0..1.0, -0.35..1.0);
    let scene = NODES
        .iter()
        .fold(scene, |s, &(label, x, y, kind)| s.node(label, x, y, kind));
    let scene = EDGES.iter().fold(scene, |s, &(from, to)| s.edge(from, to));
    EDGE_LABELS
        .iter()
        .fold(scene, |s, &(x, y, text)| s.edge_label(x, y, text))
}

pub(super) fn run(config: &RunConfig) -> Result<JobReport, JobError> {
    let scene = access_flow_scene();
    let files = StaticChartRenderer::export(
        &scene,
        &config.path("admin_access_flow.png"),
        &config.path("admin_access_flow.svg"),
    )?;

    Ok(JobReport {
        job: "access-flow",
        files,
        lines: vec!["Admin access control flowchart created successfully".to_string()],
    })
}
