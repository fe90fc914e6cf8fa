fn main() {
    let inputs = ["hello_world", "helloWorld", "Hello World", "hello-world"];

    for input in inputs {
        println!("{input}:");
        println!("    camel:  {}", yaml_casing::to_camel_case(input));
        println!("    snake:  {}", yaml_casing::to_snake_case(input));
        println!("    kebab:  {}", yaml_casing::to_kebab_case(input));
        println!("    pascal: {}", yaml_casing::to_pascal_case(input));
    }
}
