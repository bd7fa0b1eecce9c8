//! Robots: a base entity, a specialised subtype, and greeting by dynamic dispatch
//!
//! The base behaviour lives in the [`Greeter`] trait's default methods. A
//! [`PhysicianRobot`] embeds a [`Robot`] and overrides [`Greeter::greet`], calling the
//! base robot's greeting first and then extending it.

use std::fmt;

const DEFAULT_POTENTIAL: f64 = 0.5;

/// How a robot feels, derived from its two potentials on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Miserable,
    CouldBeWorse,
    Great,
}

impl Condition {
    fn from_state(state: f64) -> Self {
        if state < -1.0 {
            Condition::Miserable
        } else if state <= 0.5 {
            Condition::CouldBeWorse
        } else {
            Condition::Great
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Miserable => write!(f, "Feel miserable"),
            Condition::CouldBeWorse => write!(f, "Could be worse"),
            Condition::Great => write!(f, "Great!"),
        }
    }
}

/// Anything that is, or contains, a [`Robot`]
pub trait Greeter {
    /// The base robot carrying the shared fields
    fn robot(&self) -> &Robot;

    fn name(&self) -> &str {
        &self.robot().name
    }

    fn build_year(&self) -> i32 {
        self.robot().build_year
    }

    fn condition(&self) -> Condition {
        self.robot().condition()
    }

    /// Introduce yourself
    fn greet(&self) -> String {
        format!("Hi, I am {}", self.name())
    }
}

/// The base robot
#[derive(Debug, Clone, PartialEq)]
pub struct Robot {
    pub name: String,
    pub build_year: i32,
    potential_physical: f64,
    potential_psychic: f64,
}

impl Robot {
    /// A robot with both potentials at their default of 0.5
    pub fn new(name: impl Into<String>, build_year: i32) -> Self {
        Self::with_potentials(name, build_year, DEFAULT_POTENTIAL, DEFAULT_POTENTIAL)
    }

    pub fn with_potentials(
        name: impl Into<String>,
        build_year: i32,
        physical: f64,
        psychic: f64,
    ) -> Self {
        Self {
            name: name.into(),
            build_year,
            potential_physical: physical,
            potential_psychic: psychic,
        }
    }

    /// Computed on read from the two potentials; never stored
    pub fn condition(&self) -> Condition {
        Condition::from_state(self.potential_physical + self.potential_psychic)
    }
}

impl Greeter for Robot {
    fn robot(&self) -> &Robot {
        self
    }
}

/// A robot with a medical speciality
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicianRobot {
    base: Robot,
    pub expertise: String,
}

impl PhysicianRobot {
    pub fn new(name: impl Into<String>, build_year: i32, expertise: impl Into<String>) -> Self {
        Self {
            base: Robot::new(name, build_year),
            expertise: expertise.into(),
        }
    }
}

impl Greeter for PhysicianRobot {
    fn robot(&self) -> &Robot {
        &self.base
    }

    fn greet(&self) -> String {
        let intro = self.base.greet();
        format!(
            "{}\nEverything will be okay. I am a {} expert!",
            intro, self.expertise
        )
    }
}
