use tagcheck_core::TAGGABLE_RESOURCES;

pub fn run() {
    for resource_type in TAGGABLE_RESOURCES {
        println!("{resource_type}");
    }
}
