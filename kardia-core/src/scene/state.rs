//! Frame state definition
//!
//! Each frame is a function of the previous frame's state and a random
//! roll; the composer returns the state for the next frame.

/// Heart visibility at the end of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeartPhase {
    /// Not on screen; the next frame draws it in
    #[default]
    Hidden,
    /// Fully drawn; the next frame erases it
    Shown,
}

impl HeartPhase {
    /// Phase after one animation pass
    pub fn toggle(self) -> Self {
        match self {
            HeartPhase::Hidden => HeartPhase::Shown,
            HeartPhase::Shown => HeartPhase::Hidden,
        }
    }

    /// Check if the next pass erases
    pub fn is_shown(self) -> bool {
        self == HeartPhase::Shown
    }
}

/// Screen corner holding the caption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Corner {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners in rotation order
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Position in rotation order
    pub fn index(self) -> u8 {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomLeft => 2,
            Corner::BottomRight => 3,
        }
    }

    /// Corner at a rotation index (wraps)
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    /// Pick the next corner from a random roll
    ///
    /// Moves 1 to 3 places ahead, so the caption never stays put.
    pub fn next(self, roll: u8) -> Self {
        Self::from_index(self.index() + roll % 3 + 1)
    }

    /// Check if the caption sits on the top edge
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// Check if the caption sits on the left edge
    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }
}

/// State carried from one frame to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameState {
    /// Heart visibility
    pub phase: HeartPhase,
    /// Corner of the last caption shown
    pub corner: Corner,
}

impl FrameState {
    /// Boot state: heart hidden, no caption yet
    pub const fn new() -> Self {
        Self {
            phase: HeartPhase::Hidden,
            corner: Corner::TopLeft,
        }
    }

    /// State after a frame rolled `roll` and ran one animation pass
    pub fn advance(self, roll: u8) -> Self {
        Self {
            phase: self.phase.toggle(),
            corner: self.corner.next(roll),
        }
    }
}
