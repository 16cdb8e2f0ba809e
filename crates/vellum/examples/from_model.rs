//! Example: Creating a diagram from the semantic model
//!
//! This example demonstrates how to programmatically build a diagram
//! using the semantic model types directly and render it to DOT text.

use vellum::{
    DiagramRenderer,
    identifier::Id,
    semantic::{Diagram, Element, Node, Relation, Scope},
    style::{Direction, EdgeStyle, NodeShape},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building diagram from the semantic model...\n");

    // Create node identifiers (Id is Copy, so we can reuse them)
    let client_id = Id::new("client");
    let server_id = Id::new("server");
    let database_id = Id::new("database");

    // Build the list of elements: nodes first, then the relations
    // connecting them
    let elements = vec![
        Element::Node(Node::new(client_id, "Web Client", NodeShape::Oval)),
        Element::Node(Node::new(server_id, "API Server", NodeShape::Component)),
        Element::Node(Node::new(database_id, "Database", NodeShape::Cylinder)),
        Element::Relation(Relation::labeled(client_id, server_id, "HTTP requests")),
        Element::Relation(Relation::labeled(server_id, database_id, "SQL queries")),
        Element::Relation(Relation::new(
            database_id,
            client_id,
            Some("cache hints".to_string()),
            EdgeStyle::Dashed,
        )),
    ];

    // Create the diagram
    let diagram = Diagram::new(
        "Three Tier Service",
        "three_tier",
        Direction::LeftRight,
        Scope::new(elements),
    );

    // Print diagram info
    println!("Created diagram:");
    println!("  Title: {}", diagram.title());
    println!("  Direction: {:?}", diagram.direction());
    println!("  Elements: {}", diagram.scope().elements().len());
    println!();

    // Render the diagram to DOT using DiagramRenderer
    println!("Rendering to DOT...");
    let renderer = DiagramRenderer::default();
    let dot = renderer.render_dot(&diagram)?;

    println!("DOT source generated ({} bytes)", dot.len());

    // Write to file
    let output_path = "three_tier.dot";
    std::fs::write(output_path, &dot)?;
    println!("DOT written to: {output_path}");

    Ok(())
}
