//! Sprite catalogue and pixel masks
//!
//! The simulation never looks at pixel colours. Every drawable it knows about is a
//! `SpriteKind`, and each kind maps to a `Mask` of opaque pixels used for
//! collision. Masks come either from decoded alpha channels supplied by the asset
//! loader or from the built-in silhouettes below.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Alpha value at or above which a pixel counts as opaque (pygame's default)
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 127;

/// Every sprite the simulation can place on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    PlayerShip,
    PlayerLaser,
    EasyShip,
    MediumShip,
    HardShip,
    BossShip,
    RedLaser,
    BlueLaser,
    GreenLaser,
    FlameLaser,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 10] = [
        SpriteKind::PlayerShip,
        SpriteKind::PlayerLaser,
        SpriteKind::EasyShip,
        SpriteKind::MediumShip,
        SpriteKind::HardShip,
        SpriteKind::BossShip,
        SpriteKind::RedLaser,
        SpriteKind::BlueLaser,
        SpriteKind::GreenLaser,
        SpriteKind::FlameLaser,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// Built-in silhouette, used when no decoded asset is supplied
    pub fn default_mask(self) -> Mask {
        match self {
            SpriteKind::PlayerShip => Mask::ellipse(70, 60),
            SpriteKind::EasyShip => Mask::ellipse(50, 50),
            SpriteKind::MediumShip => Mask::ellipse(60, 55),
            SpriteKind::HardShip => Mask::ellipse(70, 60),
            SpriteKind::BossShip => Mask::ellipse(200, 150),
            SpriteKind::FlameLaser => Mask::filled(14, 40),
            SpriteKind::PlayerLaser
            | SpriteKind::RedLaser
            | SpriteKind::BlueLaser
            | SpriteKind::GreenLaser => Mask::filled(6, 24),
        }
    }
}

/// Row-major bitmap of opaque pixels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    /// Fully transparent mask
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width * height) as usize],
        }
    }

    /// Fully opaque rectangle
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    /// Ellipse inscribed in the bounding box (pixel centres inside the curve)
    pub fn ellipse(width: u32, height: u32) -> Self {
        let mut mask = Self::new(width, height);
        let rx = width as f32 / 2.0;
        let ry = height as f32 / 2.0;
        for y in 0..height {
            for x in 0..width {
                let dx = (x as f32 + 0.5 - rx) / rx;
                let dy = (y as f32 + 0.5 - ry) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    mask.set(x, y, true);
                }
            }
        }
        mask
    }

    /// Build a mask from one alpha byte per pixel
    pub fn from_alpha(width: u32, height: u32, alpha: &[u8], threshold: u8) -> Result<Self> {
        let expected = (width * height) as usize;
        if alpha.len() != expected {
            bail!(
                "alpha buffer holds {} bytes, expected {} for {}x{}",
                alpha.len(),
                expected,
                width,
                height
            );
        }
        Ok(Self {
            width,
            height,
            bits: alpha.iter().map(|&a| a >= threshold).collect(),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Opaque pixel at (x, y); out-of-range reads are transparent
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.bits[(y as u32 * self.width + x as u32) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, opaque: bool) {
        if x < self.width && y < self.height {
            self.bits[(y * self.width + x) as usize] = opaque;
        }
    }

    /// Number of opaque pixels
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// True if any opaque pixel of `self` meets an opaque pixel of `other`,
    /// with `other`'s top-left corner placed at `offset` in `self`'s space.
    pub fn overlaps(&self, other: &Mask, offset: (i32, i32)) -> bool {
        let (dx, dy) = offset;
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (self.width as i32).min(dx + other.width as i32);
        let y1 = (self.height as i32).min(dy + other.height as i32);

        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x, y) && other.get(x - dx, y - dy) {
                    return true;
                }
            }
        }
        false
    }
}

/// One mask per sprite kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteSet {
    masks: Vec<Mask>,
}

impl Default for SpriteSet {
    fn default() -> Self {
        Self {
            masks: SpriteKind::ALL.iter().map(|k| k.default_mask()).collect(),
        }
    }
}

impl SpriteSet {
    /// Replace the mask for one sprite (e.g. with a decoded asset)
    pub fn with_mask(mut self, kind: SpriteKind, mask: Mask) -> Self {
        self.masks[kind.index()] = mask;
        self
    }

    #[inline]
    pub fn mask(&self, kind: SpriteKind) -> &Mask {
        &self.masks[kind.index()]
    }

    pub fn width(&self, kind: SpriteKind) -> f32 {
        self.mask(kind).width() as f32
    }

    pub fn height(&self, kind: SpriteKind) -> f32 {
        self.mask(kind).height() as f32
    }
}
