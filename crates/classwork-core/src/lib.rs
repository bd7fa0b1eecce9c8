pub mod employee;
pub mod error;
pub mod function;
pub mod line;
pub mod point;
pub mod polynomial;
pub mod robot;
pub mod sampling;
pub mod source;

// Re-exports
pub use employee::{Employee, Manager, Staff, MIN_SALARY};
pub use error::{SalaryError, SourceError, ValidationError};
pub use function::ScalarFunction;
pub use line::{Affine, StraightLine};
pub use point::{HalfPlanePoint, Planar, PlainPoint, Point};
pub use polynomial::Polynomial;
pub use robot::{Condition, Greeter, PhysicianRobot, Robot};
pub use sampling::linspace;
pub use source::{FileLineReader, LineReader};
