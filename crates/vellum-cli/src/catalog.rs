//! The built-in diagram catalog.
//!
//! Three diagrams describing the document-management and hybrid-search
//! service: the overall system architecture, the upload pipeline, and the
//! search decision flow. Rendering these is this binary's entire job; the
//! topology of each diagram is fixed at compile time.

use vellum::{
    identifier::Id,
    semantic::{Cluster, Diagram, Element, Node, Relation, Scope},
    style::{Direction, EdgeStyle, NodeShape},
};

/// Returns every catalog diagram in render order.
pub fn all() -> Vec<Diagram> {
    vec![system_architecture(), upload_flow(), search_flow()]
}

/// Overall system architecture: client, API application, external AI
/// service, and the database layer.
pub fn system_architecture() -> Diagram {
    let client = Id::new("client");
    let api = Id::new("api");
    let upload_router = Id::new("upload_router");
    let search_router = Id::new("search_router");
    let ai_service = Id::new("ai_service");
    let activity_logger = Id::new("activity_logger");
    let azure_openai = Id::new("azure_openai");
    let postgres = Id::new("postgres");
    let documents_table = Id::new("pdf_documents");
    let answers_table = Id::new("pdf_answers");
    let chunks_table = Id::new("pdf_chunks");

    let application = Cluster::new(
        "FastAPI Application",
        Scope::new(vec![
            Element::Node(Node::new(api, "FastAPI\nMain App", NodeShape::Component)),
            Element::Cluster(Cluster::new(
                "Routers",
                Scope::new(vec![
                    Element::Node(Node::new(
                        upload_router,
                        "Upload Router\n/api/upload",
                        NodeShape::Rectangle,
                    )),
                    Element::Node(Node::new(
                        search_router,
                        "Search Router\n/api/search",
                        NodeShape::Rectangle,
                    )),
                ]),
            )),
            Element::Cluster(Cluster::new(
                "Services",
                Scope::new(vec![
                    Element::Node(Node::new(
                        ai_service,
                        "AI Service\nAzure OpenAI",
                        NodeShape::Rectangle,
                    )),
                    Element::Node(Node::new(
                        activity_logger,
                        "Logger\nActivity Tracking",
                        NodeShape::Rectangle,
                    )),
                ]),
            )),
            Element::Relation(Relation::labeled(api, upload_router, "route")),
            Element::Relation(Relation::labeled(api, search_router, "route")),
            Element::Relation(Relation::labeled(upload_router, ai_service, "analyze")),
            Element::Relation(Relation::labeled(search_router, ai_service, "embed")),
            Element::Relation(Relation::plain(upload_router, activity_logger)),
            Element::Relation(Relation::plain(search_router, activity_logger)),
        ]),
    );

    let external_services = Cluster::new(
        "External Services",
        Scope::new(vec![Element::Node(Node::new(
            azure_openai,
            "Azure OpenAI\nGPT-5 + Embeddings",
            NodeShape::Component,
        ))]),
    );

    let database_layer = Cluster::new(
        "Database Layer",
        Scope::new(vec![
            Element::Node(Node::new(
                postgres,
                "PostgreSQL\n+ pgvector",
                NodeShape::Cylinder,
            )),
            Element::Cluster(Cluster::new(
                "Tables",
                Scope::new(vec![
                    Element::Node(Node::new(
                        documents_table,
                        "pdf_documents",
                        NodeShape::Rectangle,
                    )),
                    Element::Node(Node::new(answers_table, "pdf_answers", NodeShape::Rectangle)),
                    Element::Node(Node::new(chunks_table, "pdf_chunks", NodeShape::Rectangle)),
                ]),
            )),
        ]),
    );

    let scope = Scope::new(vec![
        Element::Node(Node::new(client, "API Client", NodeShape::Oval)),
        Element::Cluster(application),
        Element::Cluster(external_services),
        Element::Cluster(database_layer),
        Element::Relation(Relation::labeled(client, api, "HTTP POST")),
        Element::Relation(Relation::labeled(ai_service, azure_openai, "API calls")),
        Element::Relation(Relation::labeled(upload_router, postgres, "SQL queries")),
        Element::Relation(Relation::labeled(search_router, postgres, "SQL queries")),
        Element::Relation(Relation::plain(postgres, documents_table)),
        Element::Relation(Relation::plain(postgres, answers_table)),
        Element::Relation(Relation::plain(postgres, chunks_table)),
    ]);

    Diagram::new(
        "COI Management System Architecture",
        "architecture_diagram",
        Direction::TopBottom,
        scope,
    )
}

/// Document upload pipeline, drawn left to right: receive, persist, analyze,
/// embed, and store answers and chunks.
pub fn upload_flow() -> Diagram {
    let client = Id::new("upload_client");
    let receive = Id::new("receive_document");
    let create_record = Id::new("create_record");
    let ai_analysis = Id::new("ai_analysis");
    let embed_answers = Id::new("embed_answers");
    let store_answers = Id::new("store_answers");
    let create_chunks = Id::new("create_chunks");
    let embed_chunks = Id::new("embed_chunks");
    let store_chunks = Id::new("store_chunks");

    let process = Cluster::new(
        "Upload Process",
        Scope::new(vec![
            Element::Node(Node::new(
                receive,
                "1. Receive\nDocument",
                NodeShape::Rectangle,
            )),
            Element::Node(Node::new(
                create_record,
                "2. Create\nRecord",
                NodeShape::Cylinder,
            )),
            Element::Node(Node::new(ai_analysis, "3. AI\nAnalysis", NodeShape::Component)),
            Element::Node(Node::new(
                embed_answers,
                "4. Embed\nAnswers",
                NodeShape::Component,
            )),
            Element::Node(Node::new(
                store_answers,
                "5. Store\nAnswers",
                NodeShape::Cylinder,
            )),
            Element::Node(Node::new(
                create_chunks,
                "6. Create\nChunks",
                NodeShape::Rectangle,
            )),
            Element::Node(Node::new(
                embed_chunks,
                "7. Embed\nChunks",
                NodeShape::Component,
            )),
            Element::Node(Node::new(
                store_chunks,
                "8. Store\nChunks",
                NodeShape::Cylinder,
            )),
        ]),
    );

    let scope = Scope::new(vec![
        Element::Node(Node::new(client, "Client", NodeShape::Oval)),
        Element::Cluster(process),
        Element::Relation(Relation::plain(client, receive)),
        Element::Relation(Relation::plain(receive, create_record)),
        Element::Relation(Relation::plain(create_record, ai_analysis)),
        Element::Relation(Relation::plain(ai_analysis, embed_answers)),
        Element::Relation(Relation::plain(embed_answers, store_answers)),
        Element::Relation(Relation::plain(store_answers, create_chunks)),
        Element::Relation(Relation::plain(create_chunks, embed_chunks)),
        Element::Relation(Relation::plain(embed_chunks, store_chunks)),
    ]);

    Diagram::new(
        "Document Upload Flow",
        "upload_flow_diagram",
        Direction::LeftRight,
        scope,
    )
}

/// Hybrid search decision flow: keyword search first, vector search only
/// when the keyword pass returns fewer than three results.
pub fn search_flow() -> Diagram {
    let client = Id::new("search_client");
    let prepare = Id::new("prepare_query");
    let keyword_search = Id::new("keyword_search");
    let verify_keyword = Id::new("verify_keyword_results");
    let decision = Id::new("check_result_count");
    let generate_embedding = Id::new("generate_embedding");
    let vector_search = Id::new("vector_search");
    let verify_vector = Id::new("verify_vector_results");
    let combine = Id::new("combine_results");

    let fallback = Cluster::new(
        "Vector Fallback (Conditional)",
        Scope::new(vec![
            Element::Node(Node::new(
                generate_embedding,
                "5. Generate\nEmbedding",
                NodeShape::Component,
            )),
            Element::Node(Node::new(
                vector_search,
                "6. Vector\nSearch",
                NodeShape::Cylinder,
            )),
            Element::Node(Node::new(
                verify_vector,
                "7. Verify\nResults",
                NodeShape::Rectangle,
            )),
            Element::Node(Node::new(
                combine,
                "8. Combine\nResults",
                NodeShape::Rectangle,
            )),
        ]),
    );

    let strategy = Cluster::new(
        "Search Strategy",
        Scope::new(vec![
            Element::Node(Node::new(prepare, "1. Prepare\nQuery", NodeShape::Rectangle)),
            Element::Node(Node::new(
                keyword_search,
                "2. Keyword\nSearch (FREE)",
                NodeShape::Cylinder,
            )),
            Element::Node(Node::new(
                verify_keyword,
                "3. Verify\nResults",
                NodeShape::Rectangle,
            )),
            Element::Node(Node::new(
                decision,
                "4. Check\nCount >= 3?",
                NodeShape::Diamond,
            )),
            Element::Cluster(fallback),
        ]),
    );

    let scope = Scope::new(vec![
        Element::Node(Node::new(client, "Client", NodeShape::Oval)),
        Element::Cluster(strategy),
        Element::Relation(Relation::plain(client, prepare)),
        Element::Relation(Relation::plain(prepare, keyword_search)),
        Element::Relation(Relation::plain(keyword_search, verify_keyword)),
        Element::Relation(Relation::plain(verify_keyword, decision)),
        Element::Relation(Relation::labeled(decision, generate_embedding, "< 3 results")),
        Element::Relation(Relation::plain(generate_embedding, vector_search)),
        Element::Relation(Relation::plain(vector_search, verify_vector)),
        Element::Relation(Relation::plain(verify_vector, combine)),
        Element::Relation(Relation::new(
            decision,
            combine,
            Some(">= 3 results".to_string()),
            EdgeStyle::Dashed,
        )),
    ]);

    Diagram::new(
        "Hybrid Search Flow",
        "search_flow_diagram",
        Direction::TopBottom,
        scope,
    )
}
