//! Dice module - the 16 classic Boggle cubes and the shake
//!
//! A shake shuffles the order of the dice, rolls each one (one face drawn
//! uniformly from six), and hands back the letters in row-major order so that
//! result `i` belongs to cell `(i / cols, i % cols)`.

use crate::rng::RandomSource;
use crate::types::{Letter, DIE_FACES};

/// Faces of the standard 16 dice.
pub const STANDARD_DICE: [[&str; DIE_FACES]; 16] = [
    ["A", "A", "C", "I", "O", "T"],
    ["T", "Y", "A", "B", "I", "L"],
    ["J", "M", "O", "Qu", "A", "B"],
    ["A", "C", "D", "E", "M", "P"],
    ["A", "C", "E", "L", "S", "R"],
    ["A", "D", "E", "N", "V", "Z"],
    ["A", "H", "M", "O", "R", "S"],
    ["B", "F", "I", "O", "R", "X"],
    ["D", "E", "N", "O", "S", "W"],
    ["D", "K", "N", "O", "T", "U"],
    ["E", "E", "F", "H", "I", "Y"],
    ["E", "G", "I", "N", "T", "V"],
    ["E", "G", "K", "L", "U", "Y"],
    ["E", "H", "I", "N", "P", "S"],
    ["E", "L", "P", "S", "T", "U"],
    ["G", "I", "L", "R", "U", "W"],
];

/// One six-sided die.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die {
    faces: [Letter; DIE_FACES],
}

impl Die {
    pub fn new(faces: [Letter; DIE_FACES]) -> Self {
        Self { faces }
    }

    fn from_static(faces: &[&'static str; DIE_FACES]) -> Self {
        Self {
            faces: faces.map(Letter::from_static),
        }
    }

    pub fn faces(&self) -> &[Letter; DIE_FACES] {
        &self.faces
    }

    pub fn has_face(&self, letter: Letter) -> bool {
        self.faces.contains(&letter)
    }

    /// Draw one face uniformly at random.
    pub fn roll<R: RandomSource>(&self, rng: &mut R) -> Letter {
        self.faces[rng.next_range(DIE_FACES as u32) as usize]
    }
}

/// Ordered catalog of dice, one per grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DieSet {
    dice: Vec<Die>,
}

impl DieSet {
    pub fn new(dice: Vec<Die>) -> Self {
        Self { dice }
    }

    /// The 16 dice of the standard game.
    pub fn standard() -> Self {
        Self {
            dice: STANDARD_DICE.iter().map(Die::from_static).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Shuffle the dice and roll each one.
    ///
    /// Returns exactly one letter per die, in placement order. Calls are
    /// independent of each other apart from advancing `rng`.
    pub fn shake<R: RandomSource>(&self, rng: &mut R) -> Vec<Letter> {
        let mut order: Vec<&Die> = self.dice.iter().collect();
        rng.shuffle(&mut order);
        order.into_iter().map(|die| die.roll(rng)).collect()
    }
}

impl Default for DieSet {
    fn default() -> Self {
        Self::standard()
    }
}
