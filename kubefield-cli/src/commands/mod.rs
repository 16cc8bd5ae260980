pub mod configmap;
