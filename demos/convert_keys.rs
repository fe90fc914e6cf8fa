use serde_derive::Serialize;

#[derive(Serialize)]
struct Address {
    zip_code: String,
    street_name: String,
}

#[derive(Serialize)]
struct User {
    user_name: String,
    home_address: Address,
    favorite_numbers: Vec<u32>,
}

fn main() {
    let user = User {
        user_name: "ada".into(),
        home_address: Address {
            zip_code: "75000".into(),
            street_name: "rue de Rivoli".into(),
        },
        favorite_numbers: vec![7, 42],
    };

    let value = serde_yaml::to_value(&user).unwrap();
    let converted = yaml_casing::convert_keys(value, yaml_casing::Case::Camel);

    println!("{}", serde_yaml::to_string(&converted).unwrap());
}
