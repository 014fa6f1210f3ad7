pub mod agent_resources;
pub mod offer;
pub mod resource;
pub mod resources;
