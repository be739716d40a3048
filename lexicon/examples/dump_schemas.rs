//! Prints every standard AFF4 object schema with its effective attributes.
//!
//! Run with: `cargo run --example dump_schemas -p aff4-lexicon`

fn main() {
    let registry = aff4_lexicon::SchemaRegistry::standard();

    println!("AFF4 lexicon v{}", aff4_lexicon::iris::AFF4_VERSION);
    println!("  Object types: {}", registry.len());
    println!();

    for schema in registry.schemas() {
        let all = schema.all_attributes();
        println!(
            "  {:45} {:>2} own, {:>2} effective  extends [{}]",
            schema.object_type(),
            schema.attributes().len(),
            all.len(),
            schema.ancestors().join(", "),
        );
        for (alias, attribute) in all {
            let marker = if aff4_lexicon::iris::is_volatile(attribute.identifier()) {
                " (volatile)"
            } else {
                ""
            };
            println!("      {:20} {}{}", alias, attribute.value_type(), marker);
        }
    }
}
