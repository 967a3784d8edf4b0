pub mod roadmap_viewport;
