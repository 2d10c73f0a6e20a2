// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene files: a dataset, a category table and a scripted command list.

use std::fs;
use std::path::{Path, PathBuf};

use chronoscope_events::{CategoryRegistry, ConfigError, Dataset, DatasetError, FilterError};
use chronoscope_imaging_vello_cpu::{CpuSurface, SurfaceError};
use chronoscope_interaction::{Changes, Command, Controller};
use chronoscope_layout::place;
use chronoscope_view::ZoomTransform;
use kurbo::{Point, Size};
use log::{info, warn};
use serde::Deserialize;

/// Errors produced while loading or replaying a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// A scene, dataset, or font file could not be read.
    #[error("reading {path}: {source}")]
    Read {
        /// The file that failed.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
    /// The scene file was not valid JSON.
    #[error(transparent)]
    Scene(#[from] serde_json::Error),
    /// The dataset could not be parsed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    /// The category table could not be parsed.
    #[error(transparent)]
    Categories(#[from] ConfigError),
    /// Neither the dataset nor the category table names a category.
    #[error(transparent)]
    Filter(#[from] FilterError),
    /// The raster surface could not be created.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    /// A scripted step named an event title the dataset does not contain.
    #[error("no event titled {0:?}")]
    UnknownTitle(String),
}

/// One scripted step.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Moves the pointer to a logical position.
    PointerMove {
        /// Logical x.
        x: f64,
        /// Logical y.
        y: f64,
    },
    /// Clicks at a logical position.
    PointerClick {
        /// Logical x.
        x: f64,
        /// Logical y.
        y: f64,
    },
    /// Moves the pointer onto the event with this title.
    Hover {
        /// Event title.
        title: String,
    },
    /// Clicks the event with this title.
    Select {
        /// Event title.
        title: String,
    },
    /// The pointer leaves the surface.
    PointerLeave,
    /// Closes the detail panel.
    Dismiss,
    /// Toggles a category.
    Toggle {
        /// Category key.
        category: String,
    },
    /// Shows only one category.
    Solo {
        /// Category key.
        category: String,
    },
    /// Shows every category.
    ShowAll,
    /// Sets the zoom transform.
    Zoom {
        /// Scale.
        k: f64,
        /// Translation in logical pixels.
        x: f64,
    },
    /// Zooms by `factor` keeping `anchor_x` fixed.
    ZoomAbout {
        /// Fixed screen x.
        anchor_x: f64,
        /// Scale multiplier.
        factor: f64,
    },
    /// Pans by `dx` logical pixels.
    Pan {
        /// Horizontal offset.
        dx: f64,
    },
    /// Resizes the surface.
    Resize {
        /// Logical width.
        width: f64,
        /// Logical height.
        height: f64,
        /// Device pixel ratio.
        #[serde(default = "one")]
        scale_factor: f64,
    },
}

fn one() -> f64 {
    1.0
}

/// A scene file.
///
/// Relative paths are resolved against the scene file's directory.
#[derive(Clone, Debug, Deserialize)]
pub struct SceneConfig {
    /// Event list (JSON array).
    pub dataset: PathBuf,
    /// Category table; every category falls back to the default color if absent.
    #[serde(default)]
    pub categories: Option<PathBuf>,
    /// Font file for labels; labels are skipped if absent.
    #[serde(default)]
    pub font: Option<PathBuf>,
    /// Logical width.
    pub width: f64,
    /// Logical height.
    pub height: f64,
    /// Device pixel ratio.
    #[serde(default = "one")]
    pub scale_factor: f64,
    /// Steps replayed after the first frame.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A loaded scene, ready to replay.
#[derive(Debug)]
pub struct Scene {
    /// Controller drawing onto a CPU surface.
    pub controller: Controller<CpuSurface>,
    /// Steps to replay.
    pub steps: Vec<Step>,
}

fn read(path: &Path) -> Result<Vec<u8>, SceneError> {
    fs::read(path).map_err(|source| SceneError::Read {
        path: path.to_owned(),
        source,
    })
}

fn read_to_string(path: &Path) -> Result<String, SceneError> {
    fs::read_to_string(path).map_err(|source| SceneError::Read {
        path: path.to_owned(),
        source,
    })
}

impl Scene {
    /// Loads a scene file and everything it references.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let config: SceneConfig = serde_json::from_slice(&read(path)?)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));

        let dataset = Dataset::from_reader(read(&base.join(&config.dataset))?.as_slice())?;
        let registry = match &config.categories {
            Some(categories) => {
                CategoryRegistry::from_json_str(&read_to_string(&base.join(categories))?)?
            }
            None => CategoryRegistry::default(),
        };
        info!(
            "loaded {} events, {} registered categories",
            dataset.len(),
            registry.len()
        );

        let mut surface =
            CpuSurface::new(Size::new(config.width, config.height), config.scale_factor)?;
        if let Some(font) = &config.font {
            surface = surface.with_font(read(&base.join(font))?)?;
        }

        let mut controller = Controller::new(dataset, registry, config.width, config.height)?;
        controller.attach_surface(surface);
        Ok(Self {
            controller,
            steps: config.steps,
        })
    }

    /// Replays every step, returning the union of what changed.
    pub fn replay(&mut self) -> Result<Changes, SceneError> {
        let mut all = Changes::empty();
        for step in std::mem::take(&mut self.steps) {
            let command = self.command_for(step)?;
            let changes = self.controller.dispatch(command);
            if changes.is_empty() {
                warn!("step changed nothing");
            }
            all |= changes;
        }
        Ok(all)
    }

    fn command_for(&self, step: Step) -> Result<Command, SceneError> {
        let viewport = self.controller.state().viewport();
        let transform = viewport.transform();
        Ok(match step {
            Step::PointerMove { x, y } => Command::PointerMove(Point::new(x, y)),
            Step::PointerClick { x, y } => Command::PointerClick(Point::new(x, y)),
            Step::Hover { title } => Command::PointerMove(self.center_of(title)?),
            Step::Select { title } => Command::PointerClick(self.center_of(title)?),
            Step::PointerLeave => Command::PointerLeave,
            Step::Dismiss => Command::Dismiss,
            Step::Toggle { category } => Command::ToggleCategory(category),
            Step::Solo { category } => Command::SoloCategory(category),
            Step::ShowAll => Command::ShowAllCategories,
            Step::Zoom { k, x } => Command::Zoom(ZoomTransform::new(k, x)),
            Step::ZoomAbout { anchor_x, factor } => {
                Command::Zoom(viewport.zoomed_about(anchor_x, factor))
            }
            Step::Pan { dx } => Command::Zoom(transform.translated(dx)),
            Step::Resize {
                width,
                height,
                scale_factor,
            } => Command::Resize {
                width,
                height,
                scale_factor,
            },
        })
    }

    fn center_of(&self, title: String) -> Result<Point, SceneError> {
        let viewport = self.controller.state().viewport();
        self.controller
            .dataset()
            .iter()
            .find(|(_, event)| event.title == title)
            .map(|(_, event)| place(event, viewport).center)
            .ok_or(SceneError::UnknownTitle(title))
    }
}
