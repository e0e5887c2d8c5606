//! Entity records for the runner — plain mutable state, no behavior
//!
//! Obstacle and collectible categories are tagged variants with their fixed
//! attributes in const tables, so a record is just a position plus a tag.

use mote_core::Rect;

/// The runner character
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    pub jumping: bool,
    /// Run-cycle frame in [0, 4)
    pub frame: u32,
}

impl Player {
    pub fn spawn(ground_y: f32) -> Self {
        Self {
            x: 80.0,
            y: ground_y,
            vy: 0.0,
            width: 30.0,
            height: 50.0,
            jumping: false,
            frame: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Obstacle categories and their fixed dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Bug,
    MergeConflict,
    NotFound,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Bug,
        ObstacleKind::MergeConflict,
        ObstacleKind::NotFound,
    ];

    pub const fn size(&self) -> (f32, f32) {
        match self {
            ObstacleKind::Bug => (30.0, 30.0),
            ObstacleKind::MergeConflict => (40.0, 50.0),
            ObstacleKind::NotFound => (35.0, 35.0),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            ObstacleKind::Bug => "bug",
            ObstacleKind::MergeConflict => "merge conflict",
            ObstacleKind::NotFound => "404",
        }
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        let (width, height) = self.kind.size();
        Rect::new(self.x, self.y, width, height)
    }
}

/// Collectible categories with their point values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleKind {
    Commit,
    Deploy,
    Coffee,
}

/// All collectibles share one footprint
pub const COLLECTIBLE_SIZE: f32 = 25.0;

impl CollectibleKind {
    pub const ALL: [CollectibleKind; 3] = [
        CollectibleKind::Commit,
        CollectibleKind::Deploy,
        CollectibleKind::Coffee,
    ];

    pub const fn points(&self) -> u32 {
        match self {
            CollectibleKind::Commit => 10,
            CollectibleKind::Deploy => 50,
            CollectibleKind::Coffee => 25,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            CollectibleKind::Commit => "commit",
            CollectibleKind::Deploy => "deploy",
            CollectibleKind::Coffee => "coffee",
        }
    }
}

/// A scrolling collectible
#[derive(Debug, Clone, Copy)]
pub struct Collectible {
    pub x: f32,
    pub y: f32,
    pub kind: CollectibleKind,
}

impl Collectible {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, COLLECTIBLE_SIZE, COLLECTIBLE_SIZE)
    }
}

/// Parallax background cloud
#[derive(Debug, Clone, Copy)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub speed: f32,
}

/// Faint code snippet drifting through the background
#[derive(Debug, Clone, Copy)]
pub struct CodeLine {
    pub x: f32,
    pub y: f32,
    pub text: &'static str,
    pub speed: f32,
    pub alpha: f32,
}

/// Snippets cycled through the background decor
pub const CODE_SNIPPETS: [&str; 15] = [
    "const debug = true;",
    "if (bug) fix();",
    "return success;",
    "await deploy();",
    "git push origin",
    "npm install",
    "// TODO: fix",
    "console.log()",
    "try { } catch",
    "while (coding)",
    "import React",
    "export default",
    "function run()",
    "let score = 0;",
    "{ status: ok }",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obstacle_rect_uses_kind_size() {
        let obstacle = Obstacle {
            x: 100.0,
            y: 300.0,
            kind: ObstacleKind::MergeConflict,
        };
        let rect = obstacle.rect();
        assert_eq!(rect.width, 40.0);
        assert_eq!(rect.height, 50.0);
    }

    #[test]
    fn collectible_points_table() {
        assert_eq!(CollectibleKind::Commit.points(), 10);
        assert_eq!(CollectibleKind::Deploy.points(), 50);
        assert_eq!(CollectibleKind::Coffee.points(), 25);
    }

    #[test]
    fn player_spawns_grounded() {
        let player = Player::spawn(320.0);
        assert_eq!(player.y, 320.0);
        assert_eq!(player.vy, 0.0);
        assert!(!player.jumping);
    }
}
