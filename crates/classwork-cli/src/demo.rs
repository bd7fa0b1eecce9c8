//! Walkthrough sections
//!
//! Each section writes its transcript to `out`. Plots go to the chart sink.

use crate::config::DemoConfig;
use anyhow::{Context, Result};
use clap::Subcommand;
use classwork_core::{
    Employee, FileLineReader, Greeter, HalfPlanePoint, PhysicianRobot, PlainPoint, Point,
    Polynomial, Robot, ScalarFunction, Staff, StraightLine,
};
use classwork_plot::{Chart, ChartSink};
use rand::Rng;
use std::io::Write;
use tracing::{debug, info};

/// Which part of the walkthrough to run
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Run every section in order
    #[default]
    All,
    /// Accessor, plain and half-plane points
    Points,
    /// Robots, their condition, and greeting by dynamic dispatch
    Robots,
    /// Callable straight lines and a chart of random lines
    Lines,
    /// Callable polynomials and their chart
    Polynomials,
    /// Validated employees and their comparisons
    Employees,
}

impl Section {
    fn expand(self) -> &'static [Section] {
        match self {
            Section::All => &[
                Section::Points,
                Section::Robots,
                Section::Lines,
                Section::Polynomials,
                Section::Employees,
            ],
            Section::Points => &[Section::Points],
            Section::Robots => &[Section::Robots],
            Section::Lines => &[Section::Lines],
            Section::Polynomials => &[Section::Polynomials],
            Section::Employees => &[Section::Employees],
        }
    }
}

/// Run `section` (or every section) and flush the sink at the end
pub fn run(
    section: Section,
    config: &DemoConfig,
    out: &mut dyn Write,
    sink: &mut dyn ChartSink,
) -> Result<()> {
    config.validate()?;
    for &part in section.expand() {
        info!(section = ?part, "running");
        match part {
            Section::Points => points(out)?,
            Section::Robots => robots(out)?,
            Section::Lines => lines(config, out, sink)?,
            Section::Polynomials => polynomials(config, out, sink)?,
            Section::Employees => employees(config, out)?,
            Section::All => unreachable!("expand never yields All"),
        }
    }
    sink.finish().context("failed to display charts")?;
    Ok(())
}

pub fn points(out: &mut dyn Write) -> Result<()> {
    let mut c_point = Point::new(-3.0, 4.0);
    writeln!(out, "{} {}", c_point.x(), c_point.y())?;
    c_point.set_x(12.0);
    c_point.set_y(13.0);
    writeln!(out, "{} {}", c_point.x(), c_point.y())?;

    let mut p_point = PlainPoint::new(-2.0, 6.0);
    writeln!(out, "{} {}", p_point.x, p_point.y)?;
    p_point.x = 13.0;
    p_point.y = 12.0;
    writeln!(out, "{} {}", p_point.x, p_point.y)?;

    let mut first = HalfPlanePoint::new(2.0, -6.0);
    let mut second = HalfPlanePoint::new(6.0, -3.0);
    let sum = first + second;
    writeln!(out, "{}", first.y())?;
    writeln!(out, "{}", sum)?;
    writeln!(out, "{}", first)?;
    writeln!(out, "Distance: {}", first.distance(&second))?;

    first.set_y(12.0);
    first.set_x(13.0);
    second.set_y(-5.0);
    writeln!(out, "{} {}", first.x(), first.y())?;

    let list_of_points = [first, second];
    let list_of_points2 = [first + first, sum];
    writeln!(out, "Starting loop:")?;
    for point in list_of_points.iter().chain(list_of_points2.iter()) {
        writeln!(out, "{}", point)?;
    }
    Ok(())
}

pub fn robots(out: &mut dyn Write) -> Result<()> {
    let tony = Robot::new("Tony", 2093);
    let jurisa = Robot::with_potentials("Jurisa", 2075, -0.9, 1.3);
    writeln!(
        out,
        "Tony: {} Jurisa: {}",
        tony.condition(),
        jurisa.condition()
    )?;

    let robots: Vec<Box<dyn Greeter>> = vec![
        Box::new(PhysicianRobot::new("Dr. Merlin", 2045, "Radiology")),
        Box::new(Robot::new("Maxwell", 2053)),
    ];
    for robot in &robots {
        writeln!(out, "{}", robot.greet())?;
    }
    Ok(())
}

pub fn lines(config: &DemoConfig, out: &mut dyn Write, sink: &mut dyn ChartSink) -> Result<()> {
    let line = StraightLine::new(0.7, -2.0);
    writeln!(out, "{}", line)?;
    for x in -3..3 {
        writeln!(out, "{}", line.evaluate(f64::from(x)))?;
    }

    let xs = config.xs();
    let mut rng = config.rng();
    let mut chart = Chart::new("Lines with uniformly random slope and y-intercept");
    for i in 0..config.lines {
        let random_line = StraightLine::new(rng.gen_range(-4.0..4.0), rng.gen_range(-2.0..2.0));
        debug!(%random_line, "drew line");
        writeln!(out, "line{}: {}", i, random_line)?;
        chart.plot(format!("line{}", i), &random_line, &xs);
    }
    sink.show(&chart).context("failed to show the line chart")?;
    Ok(())
}

pub fn polynomials(
    config: &DemoConfig,
    out: &mut dyn Write,
    sink: &mut dyn ChartSink,
) -> Result<()> {
    let curves = [
        Polynomial::new([-2.0]),
        Polynomial::new([3.0, -2.0]),
        Polynomial::new([1.0, 3.0, -2.0]),
        Polynomial::new([-0.5, 2.0, 1.0, 3.0]),
    ];

    let xs = config.xs();
    let mut chart = Chart::new("Polynomial curves");
    for (i, curve) in curves.iter().enumerate() {
        writeln!(out, "curve{}: {}", i, curve)?;
        chart.plot(format!("curve{}", i), curve, &xs);
    }
    sink.show(&chart)
        .context("failed to show the polynomial chart")?;
    Ok(())
}

pub fn employees(config: &DemoConfig, out: &mut dyn Write) -> Result<()> {
    let emp1 = Employee::new("John", 65000.0)?;
    let emp2 = Employee::new("Mark", 65000.0)?;
    writeln!(
        out,
        "{} {} {} {}",
        emp1.equals(&emp2),
        emp1.not_equals(&emp2),
        emp1.at_least(&emp2),
        emp1.less_than(&emp2)
    )?;
    writeln!(out, "{}", emp1)?;

    match Employee::new("Kat", -200.0) {
        Ok(kat) => writeln!(out, "{}", kat)?,
        Err(err) => writeln!(out, "Could not hire Kat: {}", err)?,
    }

    let mut emp1 = emp1;
    if let Err(err) = emp1.set_salary(100.0) {
        writeln!(out, "Could not cut John's salary: {}", err)?;
    }

    if let Some(path) = &config.employee_file {
        let hired = Employee::from_file(path, &FileLineReader)
            .with_context(|| format!("failed to hire from {}", path.display()))?;
        writeln!(out, "{}", hired)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Vec<String> {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_points_transcript() {
        let lines = transcript(|out| points(out));
        assert_eq!(
            lines,
            vec![
                "-3 4",
                "12 13",
                "-2 6",
                "13 12",
                "0",
                "(8 , 0)",
                "(2 , 0)",
                "Distance: 4",
                "13 12",
                "Starting loop:",
                "(13 , 12)",
                "(6 , 0)",
                "(26 , 24)",
                "(8 , 0)",
            ]
        );
    }

    #[test]
    fn test_robots_transcript() {
        let lines = transcript(|out| robots(out));
        assert_eq!(
            lines,
            vec![
                "Tony: Great! Jurisa: Could be worse",
                "Hi, I am Dr. Merlin",
                "Everything will be okay. I am a Radiology expert!",
                "Hi, I am Maxwell",
            ]
        );
    }

    #[test]
    fn test_employees_transcript() {
        let lines = transcript(|out| employees(&DemoConfig::default(), out));
        assert_eq!(lines[0], "false true true false");
        assert_eq!(lines[1], "My name is John and my salary is 65000.");
        assert!(lines[2].starts_with("Could not hire Kat: Salary must be non-negative!"));
        assert!(lines[3].starts_with("Could not cut John's salary: salary must be at least 30000."));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_section_expansion() {
        assert_eq!(Section::All.expand().len(), 5);
        assert_eq!(Section::Lines.expand(), &[Section::Lines]);
        assert_eq!(Section::default(), Section::All);
    }
}
