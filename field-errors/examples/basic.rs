// Example: flatten issues for a signup form, with and without a translator.
use field_errors::{Flattener, Issue, PathSegment, flatten_errors};

fn main() {
    let issues = vec![
        Issue::new(["name"], "Required").with_code("invalid_type"),
        Issue::new(["address", "street"], "Required").with_code("invalid_type"),
        Issue::new(["address", "city"], "Required").with_code("invalid_type"),
        Issue::new(
            [
                PathSegment::from("phones"),
                PathSegment::Index(1),
                PathSegment::from("number"),
            ],
            "Invalid phone number",
        )
        .with_code("invalid_string"),
        Issue::new(["name"], "Must be at least 2 characters").with_code("too_small"),
    ];

    let errors = flatten_errors(Some(issues.as_slice()));
    for (field, messages) in errors.iter() {
        println!("{field}: {messages:?}");
    }
    println!("first name error: {:?}", errors.first("name"));

    let localized =
        Flattener::<Issue>::new().with_translator(|issue| match issue.code.as_deref() {
            Some("invalid_type") => "Pflichtfeld".to_string(),
            Some("too_small") => "Zu kurz".to_string(),
            _ => issue.message.clone(),
        });
    let errors = localized.flatten(Some(issues.as_slice()));
    println!("localized name errors: {:?}", errors.get("name"));

    println!("no issues: {:?}", flatten_errors::<Issue>(None));
}
