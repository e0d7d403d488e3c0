//! Integration tests for shapes, the shape store and employee salaries.

use std::f64::consts::PI;
use std::sync::Arc;

use rstest::rstest;

use solid::application::services::ReportService;
use solid::domain::{
    employee_for, format_number, Circle, Employee, EmployeeType, FullTimeEmployee,
    InternEmployee, PartTimeEmployee, Rectangle, Shape, ShapeStore, Triangle,
};
use solid::util::testing::{init_test_setup, RecordingConsole};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================
// Shapes
// ============================================================

#[rstest]
#[case(5.0, PI * 25.0)]
#[case(0.0, 0.0)]
#[case(2.5, PI * 6.25)]
fn given_radius_when_computing_circle_area_then_is_pi_r_squared(
    #[case] radius: f64,
    #[case] expected: f64,
) {
    assert!(approx_eq(Circle::new(radius).area(), expected));
}

#[rstest]
#[case(4.0, 5.0, 20.0)]
#[case(0.0, 5.0, 0.0)]
#[case(2.5, 3.2, 8.0)]
#[case(3.0, 3.0, 9.0)]
fn given_sides_when_computing_rectangle_area_then_is_product(
    #[case] height: f64,
    #[case] width: f64,
    #[case] expected: f64,
) {
    assert!(approx_eq(Rectangle::new(height, width).area(), expected));
}

#[rstest]
#[case(3.0)]
#[case(0.0)]
#[case(2.5)]
fn given_side_when_computing_triangle_area_then_is_equilateral_area(#[case] length: f64) {
    let expected = length * length * 3f64.sqrt() / 4.0;
    assert!(approx_eq(Triangle::new(length).area(), expected));
}

#[test]
fn given_sample_shapes_when_summing_then_equals_sum_of_areas() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(5.0)),
        Box::new(Rectangle::new(4.0, 5.0)),
        Box::new(Triangle::new(3.0)),
    ];
    let store = ShapeStore::new(shapes);

    let expected = PI * 25.0 + 20.0 + 9.0 * 3f64.sqrt() / 4.0;
    assert!(approx_eq(store.calculate_area(), expected));
    assert_eq!(store.shapes().len(), 3);
}

#[test]
fn given_empty_store_when_summing_then_is_zero() {
    assert_eq!(ShapeStore::default().calculate_area(), 0.0);
}

#[test]
fn given_single_shape_when_summing_then_equals_its_area() {
    let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Rectangle::new(2.0, 3.0))];
    let store = ShapeStore::new(shapes);
    assert_eq!(store.calculate_area(), 6.0);
}

#[derive(Debug)]
struct Square {
    side: f64,
}

impl Shape for Square {
    fn name(&self) -> &'static str {
        "square"
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}

#[test]
fn given_new_shape_type_when_added_to_store_then_store_needs_no_change() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Square { side: 2.0 }),
        Box::new(Rectangle::new(1.0, 1.0)),
    ];
    let store = ShapeStore::new(shapes);
    assert_eq!(store.calculate_area(), 5.0);
}

#[test]
fn given_store_when_reporting_total_then_prints_rendered_number() {
    init_test_setup();
    let console = Arc::new(RecordingConsole::new());
    let report = ReportService::new(console.clone());
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(4.0, 5.0)),
        Box::new(Rectangle::new(2.5, 3.2)),
    ];
    let store = ShapeStore::new(shapes);

    let total = report.print_total_area(&store);

    assert_eq!(total, 28.0);
    assert_eq!(console.lines(), vec!["28"]);
}

// ============================================================
// Employees
// ============================================================

#[test]
fn given_employee_types_when_converted_then_have_stable_ordinals() {
    assert_eq!(EmployeeType::FullTime as u8, 0);
    assert_eq!(EmployeeType::PartTime as u8, 1);
    assert_eq!(EmployeeType::Intern as u8, 2);
}

#[rstest]
#[case(EmployeeType::FullTime, "Alice", 5000)]
#[case(EmployeeType::PartTime, "Bob", 3000)]
#[case(EmployeeType::Intern, "Charlie", 1000)]
fn given_employee_type_when_built_then_has_fixed_salary(
    #[case] employee_type: EmployeeType,
    #[case] name: &str,
    #[case] salary: u32,
) {
    let employee = employee_for(employee_type, name);

    assert_eq!(employee.name(), name);
    assert_eq!(employee.employee_type(), employee_type);
    assert_eq!(employee.calculate_salary(), salary);
}

#[rstest]
#[case("")]
#[case("José María")]
#[case("李小龙")]
fn given_unusual_names_when_built_then_names_are_kept_verbatim(#[case] name: &str) {
    let full_time = FullTimeEmployee::new(name);
    let intern = InternEmployee::new(name);

    assert_eq!(full_time.name(), name);
    assert_eq!(full_time.calculate_salary(), 5000);
    assert_eq!(intern.calculate_salary(), 1000);
}

#[test]
fn given_long_name_when_built_then_salary_is_unaffected() {
    let name = "A".repeat(1000);
    let employee = PartTimeEmployee::new(name.clone());
    assert_eq!(employee.name(), name);
    assert_eq!(employee.calculate_salary(), 3000);
}

#[test]
fn given_mixed_staff_when_reporting_payroll_then_prints_each_salary_in_order() {
    init_test_setup();
    let console = Arc::new(RecordingConsole::new());
    let report = ReportService::new(console.clone());
    let employees: Vec<Box<dyn Employee>> = vec![
        Box::new(FullTimeEmployee::new("Alice")),
        Box::new(PartTimeEmployee::new("Bob")),
        Box::new(InternEmployee::new("Charlie")),
    ];

    let total = report.print_payroll(&employees);

    assert_eq!(total, 9000);
    assert_eq!(
        console.lines(),
        vec![
            "Alice's salary is 5000",
            "Bob's salary is 3000",
            "Charlie's salary is 1000",
        ]
    );
}

#[rstest]
#[case(20.0, "20")]
#[case(0.0, "0")]
#[case(-0.0, "0")]
#[case(99.99, "99.99")]
#[case(-50.0, "-50")]
#[case(f64::INFINITY, "Infinity")]
fn given_number_when_rendered_then_matches_console_form(#[case] value: f64, #[case] expected: &str) {
    assert_eq!(format_number(value), expected);
}
