use dquel::{BooleanField, NumberField, StringField};

fn main() {
    // Declare the filterable fields once.
    let name = StringField::new("name");
    let age = NumberField::new("age");
    let enabled = BooleanField::new("enabled");

    // Compose a predicate; nothing is validated or serialized yet.
    let criteria = (!name.contains("bot"))
        .and(age.goe(18).or(name.member_of(["alice", "bob"])))
        .and(&enabled);

    // Serialize to DQL.
    match criteria.to_query() {
        Ok(query) => println!("{query}"),
        Err(err) => eprintln!("failed to render: {err}"),
    }
}
