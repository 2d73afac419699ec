use dquel::{FilterBuilder, NumberField, StringField, to_optional_filter};

/// The filter fields a user-listing endpoint exposes.
struct UserFields {
    name: StringField,
    age: NumberField,
}

impl UserFields {
    fn new() -> Self {
        Self {
            name: StringField::new("name"),
            age: NumberField::new("age"),
        }
    }
}

/// A request as it might arrive over the wire: every filter input optional.
struct ListUsersRequest {
    name_contains: Option<String>,
    min_age: Option<i64>,
    tags: Option<Vec<String>>,
}

fn main() {
    let fields = UserFields::new();

    // Absent inputs simply contribute no criteria.
    let request = ListUsersRequest {
        name_contains: Some("an".to_owned()),
        min_age: Some(21),
        tags: Some(vec!["staff".to_owned(), String::new()]),
    };

    let criteria = FilterBuilder::new()
        .string(|v| fields.name.contains_ignore_case(v), request.name_contains)
        .add(|v| fields.age.goe(v), request.min_age)
        .string_list(|v| fields.name.member_of(v), request.tags)
        .build();

    match criteria {
        Some(criteria) => println!("filter: {}", criteria.to_query().expect("render")),
        None => println!("no filter given"),
    }

    // Or let the caller hand over a whole filter closure, à la carte.
    let rendered = to_optional_filter(
        &fields,
        Some(|f: &UserFields| f.name.starts_with("A").and(f.age.lt(65))),
    )
    .expect("render");
    println!("closure filter: {rendered:?}");
}
