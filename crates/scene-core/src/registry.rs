use std::fmt;
use std::str::FromStr;

/// Every scene the index mounts, with the DOM selector it binds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Cursor,
    Circles,
    Lines,
    BrickWave,
    SphereGrid,
    CubeGrid,
    DragGrid,
    Carousel,
    Preloader,
    Template,
}

impl SceneKind {
    pub const ALL: [SceneKind; 10] = [
        SceneKind::Cursor,
        SceneKind::Circles,
        SceneKind::Lines,
        SceneKind::BrickWave,
        SceneKind::SphereGrid,
        SceneKind::CubeGrid,
        SceneKind::DragGrid,
        SceneKind::Carousel,
        SceneKind::Preloader,
        SceneKind::Template,
    ];

    /// Value of the `data-scene` attribute; the cursor uses `data-cursor`.
    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Cursor => "cursor",
            SceneKind::Circles => "circles",
            SceneKind::Lines => "lines",
            SceneKind::BrickWave => "brick-wave",
            SceneKind::SphereGrid => "circle-grid",
            SceneKind::CubeGrid => "cloud-grid",
            SceneKind::DragGrid => "drag-grid",
            SceneKind::Carousel => "img-slider",
            SceneKind::Preloader => "brick-preloader",
            SceneKind::Template => "template",
        }
    }

    /// Selector for the mount element itself.
    pub fn mount_selector(self) -> String {
        match self {
            SceneKind::Cursor => "[data-cursor]".to_string(),
            other => format!("[data-scene=\"{}\"]", other.name()),
        }
    }

    /// Whether the scene draws into a `<canvas>` the page places inside the
    /// mount, rather than one it appends itself.
    pub fn uses_page_canvas(self) -> bool {
        matches!(
            self,
            SceneKind::Circles | SceneKind::Lines | SceneKind::Preloader
        )
    }

    /// Selector for the element the scene ultimately binds to.
    pub fn selector(self) -> String {
        if self.uses_page_canvas() {
            format!("{} canvas", self.mount_selector())
        } else {
            self.mount_selector()
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| format!("unknown scene `{s}`"))
    }
}

/// Outcome of offering every scene to a page.
#[derive(Debug)]
pub struct MountReport<S, E> {
    pub mounted: Vec<(SceneKind, S)>,
    pub absent: Vec<SceneKind>,
    pub failed: Vec<(SceneKind, E)>,
}

impl<S, E> MountReport<S, E> {
    /// Runs `mount` once per kind, in [`SceneKind::ALL`] order. `Ok(None)`
    /// means the scene's element is not on the page.
    pub fn collect(mut mount: impl FnMut(SceneKind) -> Result<Option<S>, E>) -> Self {
        let mut report = Self {
            mounted: Vec::new(),
            absent: Vec::new(),
            failed: Vec::new(),
        };
        for kind in SceneKind::ALL {
            match mount(kind) {
                Ok(Some(scene)) => report.mounted.push((kind, scene)),
                Ok(None) => report.absent.push(kind),
                Err(e) => report.failed.push((kind, e)),
            }
        }
        report
    }

    /// Shared input listeners are wanted only once something mounted.
    pub fn needs_input(&self) -> bool {
        !self.mounted.is_empty()
    }
}
