use std::fmt;

/// pixels the crop window moves per offset step
pub const STEP_PIXELS: i64 = 12;

/// largest step of each direction group (steps run 1..=MAX_STEP)
pub const MAX_STEP: u32 = 5;

pub const NUM_OFFSET_SPECS: usize = Direction::ALL.len() * MAX_STEP as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    Up,
    Down,
}

/// The eight compass directions a crop window can be shifted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    L,
    R,
    U,
    D,
    LU,
    RU,
    LD,
    RD,
}

impl Direction {
    /// all directions in output order
    pub const ALL: [Direction; 8] = [
        Direction::L,
        Direction::R,
        Direction::U,
        Direction::D,
        Direction::LU,
        Direction::RU,
        Direction::LD,
        Direction::RD,
    ];

    pub fn horizontal(self) -> Option<Horizontal> {
        match self {
            Direction::L | Direction::LU | Direction::LD => Some(Horizontal::Left),
            Direction::R | Direction::RU | Direction::RD => Some(Horizontal::Right),
            Direction::U | Direction::D => None,
        }
    }

    pub fn vertical(self) -> Option<Vertical> {
        match self {
            Direction::U | Direction::LU | Direction::RU => Some(Vertical::Up),
            Direction::D | Direction::LD | Direction::RD => Some(Vertical::Down),
            Direction::L | Direction::R => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::L => "L",
            Direction::R => "R",
            Direction::U => "U",
            Direction::D => "D",
            Direction::LU => "LU",
            Direction::RU => "RU",
            Direction::LD => "LD",
            Direction::RD => "RD",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the 40 offset variants: a direction and a step in `1..=MAX_STEP`.
///
/// Every variant owns an output tree named `Offset-<direction>-<step>` below the
/// output base directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetSpec {
    pub direction: Direction,
    pub step: u32,
}

impl OffsetSpec {
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// signed (dx, dy) displacement of the crop origin in pixels
    pub fn displacement(&self) -> (i64, i64) {
        let d = self.step as i64 * STEP_PIXELS;

        let dx = match self.direction.horizontal() {
            Some(Horizontal::Left) => -d,
            Some(Horizontal::Right) => d,
            None => 0,
        };
        let dy = match self.direction.vertical() {
            Some(Vertical::Up) => -d,
            Some(Vertical::Down) => d,
            None => 0,
        };

        (dx, dy)
    }
}

impl fmt::Display for OffsetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Offset-{}-{}", self.direction, self.step)
    }
}

/// The fixed set of offset variants, grouped by direction (in `Direction::ALL` order)
/// and ascending step within each group.
pub const OFFSET_SPECS: [OffsetSpec; NUM_OFFSET_SPECS] = build_offset_specs();

const fn build_offset_specs() -> [OffsetSpec; NUM_OFFSET_SPECS] {
    let mut specs = [OffsetSpec { direction: Direction::L, step: 1 }; NUM_OFFSET_SPECS];
    let per_group = MAX_STEP as usize;

    let mut i = 0;
    while i < NUM_OFFSET_SPECS {
        specs[i] = OffsetSpec {
            direction: Direction::ALL[i / per_group],
            step: (i % per_group) as u32 + 1,
        };
        i += 1;
    }
    specs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn forty_unique_names() {
        let names: HashSet<String> = OFFSET_SPECS.iter().map(|s| s.name()).collect();
        assert_eq!(OFFSET_SPECS.len(), 40);
        assert_eq!(names.len(), 40);
    }

    #[test]
    fn ordering_is_direction_then_step() {
        assert_eq!(OFFSET_SPECS[0].name(), "Offset-L-1");
        assert_eq!(OFFSET_SPECS[4].name(), "Offset-L-5");
        assert_eq!(OFFSET_SPECS[5].name(), "Offset-R-1");
        assert_eq!(OFFSET_SPECS[20].name(), "Offset-LU-1");
        assert_eq!(OFFSET_SPECS[39].name(), "Offset-RD-5");

        for (i, spec) in OFFSET_SPECS.iter().enumerate() {
            assert_eq!(spec.direction, Direction::ALL[i / 5]);
            assert_eq!(spec.step as usize, i % 5 + 1);
        }
    }

    #[test]
    fn display_matches_name() {
        for spec in OFFSET_SPECS.iter() {
            assert_eq!(spec.to_string(), spec.name());
        }
    }

    #[test]
    fn pure_directions_move_one_axis() {
        let spec = |direction| OffsetSpec { direction, step: 2 };
        assert_eq!(spec(Direction::L).displacement(), (-24, 0));
        assert_eq!(spec(Direction::R).displacement(), (24, 0));
        assert_eq!(spec(Direction::U).displacement(), (0, -24));
        assert_eq!(spec(Direction::D).displacement(), (0, 24));
    }

    #[test]
    fn diagonals_move_both_axes() {
        let spec = |direction| OffsetSpec { direction, step: 5 };
        assert_eq!(spec(Direction::LU).displacement(), (-60, -60));
        assert_eq!(spec(Direction::RU).displacement(), (60, -60));
        assert_eq!(spec(Direction::LD).displacement(), (-60, 60));
        assert_eq!(spec(Direction::RD).displacement(), (60, 60));
    }
}
