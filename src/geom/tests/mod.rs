mod test_caps_basic;
mod test_mesh_sanity;
mod test_triangulation_basic;
