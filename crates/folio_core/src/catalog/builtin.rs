//! Built-in project and post catalogs.
//!
//! Catalog content is fixed at build time and validated on first access.

use crate::catalog::Catalog;
use crate::model::item::{Media, Post, Project};
use once_cell::sync::Lazy;
use std::sync::Arc;

static PROJECTS: Lazy<Arc<Catalog<Project>>> = Lazy::new(|| {
    Arc::new(
        Catalog::new(vec![
            Project::new(
                1,
                "Smart Home Energy Monitor",
                "ESP32 + CT sensors + dashboard.",
                &["IoT", "Embedded", "Stm32"],
                Media::image_placeholder(),
            ),
            Project::new(
                2,
                "Quadcopter Flight Controller",
                "PID tuning & telemetry.",
                &["Robotics", "Control", "C++"],
                Media::video_placeholder(),
            ),
            Project::new(
                3,
                "ML Defect Detector",
                "Vision model for surface defects.",
                &["ML", "Vision", "Python"],
                Media::image_placeholder(),
            ),
            Project::new(
                4,
                "Edge Audio Keyword Spotting",
                "TinyML on microcontrollers.",
                &["ML", "Embedded"],
                Media::video_placeholder(),
            ),
        ])
        .expect("built-in project catalog must be valid"),
    )
});

static POSTS: Lazy<Arc<Catalog<Post>>> = Lazy::new(|| {
    Arc::new(
        Catalog::new(vec![
            Post::new(
                1,
                "Building a PID Loop from Scratch",
                "2025-03-02",
                &["Control", "Robotics"],
                "How I tuned a quadcopter PID using step response and ZN heuristics.",
                6,
            ),
            Post::new(
                2,
                "ESP32 Power Profiling",
                "2025-01-15",
                &["IoT", "Embedded"],
                "Measuring deep-sleep vs active current and optimizing wake windows.",
                5,
            ),
            Post::new(
                3,
                "TinyML Keyword Spotting",
                "2024-11-20",
                &["ML", "Audio"],
                "Datasets, MFCC, and quantization tricks for microcontrollers.",
                7,
            ),
        ])
        .expect("built-in post catalog must be valid"),
    )
});

/// Shared handle to the project gallery catalog.
pub fn projects() -> Arc<Catalog<Project>> {
    Arc::clone(&*PROJECTS)
}

/// Shared handle to the blog catalog.
pub fn posts() -> Arc<Catalog<Post>> {
    Arc::clone(&*POSTS)
}
