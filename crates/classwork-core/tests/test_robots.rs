/// Tests for greeting through the base trait object
use classwork_core::{Condition, Greeter, PhysicianRobot, Robot};

#[test]
fn test_physician_greeting_extends_base() {
    let doc = PhysicianRobot::new("Dr. Merlin", 2045, "Radiology");
    let base = Robot::new("Dr. Merlin", 2045).greet();
    let greeting = doc.greet();

    assert!(greeting.starts_with(&base));
    let expertise = "Everything will be okay. I am a Radiology expert!";
    let base_at = greeting.find(&base).unwrap();
    let expertise_at = greeting.find(expertise).unwrap();
    assert!(base_at < expertise_at);
}

#[test]
fn test_dynamic_dispatch_uses_override() {
    let robots: Vec<Box<dyn Greeter>> = vec![
        Box::new(PhysicianRobot::new("Dr. Merlin", 2045, "Radiology")),
        Box::new(Robot::new("Maxwell", 2053)),
    ];

    let greetings: Vec<String> = robots.iter().map(|r| r.greet()).collect();
    assert_eq!(
        greetings[0],
        "Hi, I am Dr. Merlin\nEverything will be okay. I am a Radiology expert!"
    );
    assert_eq!(greetings[1], "Hi, I am Maxwell");
}

#[test]
fn test_condition_through_trait_object() {
    let jurisa: &dyn Greeter = &Robot::with_potentials("Jurisa", 2075, -0.9, 1.3);
    assert_eq!(jurisa.condition(), Condition::CouldBeWorse);
    assert_eq!(jurisa.build_year(), 2075);
}
