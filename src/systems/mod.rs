pub mod collision;
pub mod joints;
pub mod rigid_body;
