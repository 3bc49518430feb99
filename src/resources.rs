//! Texture cache
//!
//! Explicitly constructed and owned by the embedding application; the
//! simulation only ever sees resolved [`TextureId`] handles. A missing
//! directory, file or texture is logged and skipped - entities keep
//! participating in simulation and collision using geometry alone.

use std::collections::HashMap;
use std::path::Path;

use crate::sim::obstacle::ObstacleKind;
use crate::sim::powerup::PowerUpKind;

/// Opaque handle to a registered texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// A registered texture: handle plus pixel dimensions.
#[derive(Debug, Clone)]
pub struct Texture {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

/// Name -> texture registry.
#[derive(Debug, Default)]
pub struct ResourceCache {
    textures: HashMap<String, Texture>,
    next_id: u32,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `dir` for `.png` files and register each under its file stem.
    /// Dimensions come from the PNG header; pixel data stays on disk for
    /// whatever renderer ends up consuming it. Returns how many textures
    /// were registered.
    pub fn load_textures_from_dir(&mut self, dir: &Path) -> usize {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("texture directory {} unavailable: {err}", dir.display());
                return 0;
            }
        };

        let mut loaded = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("png") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match image::image_dimensions(&path) {
                Ok((width, height)) => {
                    self.insert_texture(stem, width, height);
                    loaded += 1;
                }
                Err(err) => log::warn!("skipping texture {}: {err}", path.display()),
            }
        }
        log::info!("registered {loaded} textures from {}", dir.display());
        loaded
    }

    /// Register a texture directly (tests, embedders with their own loader).
    pub fn insert_texture(&mut self, name: &str, width: u32, height: u32) -> TextureId {
        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.textures.insert(name.to_owned(), Texture { id, width, height });
        id
    }

    pub fn texture(&self, name: &str) -> Option<&Texture> {
        self.textures.get(name)
    }

    pub fn texture_id(&self, name: &str) -> Option<TextureId> {
        self.textures.get(name).map(|t| t.id)
    }

    pub fn has_texture(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// Per-kind texture lookups, resolved once at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpriteSet {
    pub player: Option<TextureId>,
    pub train: Option<TextureId>,
    pub barrier: Option<TextureId>,
    pub cone: Option<TextureId>,
    pub fence: Option<TextureId>,
    pub coin: Option<TextureId>,
    pub magnet: Option<TextureId>,
    pub jetpack: Option<TextureId>,
    pub shield: Option<TextureId>,
    pub double_coin: Option<TextureId>,
}

impl SpriteSet {
    pub fn from_cache(cache: &ResourceCache) -> Self {
        let set = Self {
            player: cache.texture_id("playerSpritesheet"),
            // full consist preferred over the single-car fallback
            train: cache
                .texture_id("trainFull")
                .or_else(|| cache.texture_id("train")),
            barrier: cache.texture_id("barrier"),
            cone: cache.texture_id("cone"),
            fence: cache.texture_id("fence"),
            coin: cache.texture_id("coin"),
            magnet: cache.texture_id("magnet"),
            jetpack: cache.texture_id("jetpack"),
            shield: cache.texture_id("shield"),
            double_coin: cache.texture_id("doublecoin"),
        };
        let missing = set.missing();
        if missing > 0 {
            log::warn!("{missing} entity textures missing; affected entities render untextured");
        }
        set
    }

    pub fn obstacle(&self, kind: ObstacleKind) -> Option<TextureId> {
        match kind {
            ObstacleKind::Train => self.train,
            ObstacleKind::Barrier => self.barrier,
            ObstacleKind::Cone => self.cone,
            ObstacleKind::Fence => self.fence,
        }
    }

    pub fn power_up(&self, kind: PowerUpKind) -> Option<TextureId> {
        match kind {
            PowerUpKind::Magnet => self.magnet,
            PowerUpKind::Jetpack => self.jetpack,
            PowerUpKind::Shield => self.shield,
            PowerUpKind::DoubleCoin => self.double_coin,
        }
    }

    fn missing(&self) -> usize {
        [
            self.player,
            self.train,
            self.barrier,
            self.cone,
            self.fence,
            self.coin,
            self.magnet,
            self.jetpack,
            self.shield,
            self.double_coin,
        ]
        .iter()
        .filter(|t| t.is_none())
        .count()
    }
}
