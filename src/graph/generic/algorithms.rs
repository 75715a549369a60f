pub mod acyclic;
pub mod induced_p4;
pub mod p4_sparse;
