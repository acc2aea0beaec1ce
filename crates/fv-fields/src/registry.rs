//! Named, shared fields owned by the solver.
//!
//! Fields are stored as `Arc<RwLock<_>>` handles so a scheme can hold a
//! reference to a field (the face flux, the density) that the solver keeps
//! updating between evaluations.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use fv_core::{Real, Vector};
use tracing::trace;

use crate::error::{FieldError, FieldResult};
use crate::surface_field::SurfaceField;
use crate::vol_field::VolField;

/// Shared, mutable handle to a field.
pub type Shared<F> = Arc<RwLock<F>>;

pub fn shared<F>(field: F) -> Shared<F> {
    Arc::new(RwLock::new(field))
}

/// Read access, tolerating a poisoned lock.
pub fn read<F>(field: &Shared<F>) -> RwLockReadGuard<'_, F> {
    field.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write access, tolerating a poisoned lock.
pub fn write<F>(field: &Shared<F>) -> RwLockWriteGuard<'_, F> {
    field.write().unwrap_or_else(PoisonError::into_inner)
}

/// A field stored in the registry.
#[derive(Debug, Clone)]
pub enum RegisteredField {
    VolScalar(Shared<VolField<Real>>),
    VolVector(Shared<VolField<Vector>>),
    SurfaceScalar(Shared<SurfaceField<Real>>),
    SurfaceVector(Shared<SurfaceField<Vector>>),
}

impl RegisteredField {
    pub fn kind(&self) -> &'static str {
        match self {
            RegisteredField::VolScalar(_) => VolField::<Real>::KIND,
            RegisteredField::VolVector(_) => VolField::<Vector>::KIND,
            RegisteredField::SurfaceScalar(_) => SurfaceField::<Real>::KIND,
            RegisteredField::SurfaceVector(_) => SurfaceField::<Vector>::KIND,
        }
    }
}

/// Field types that can live in an [`ObjectRegistry`].
pub trait RegistryEntry: Sized {
    const KIND: &'static str;

    fn entry_name(&self) -> &str;

    fn wrap(field: Shared<Self>) -> RegisteredField;

    fn unwrap_entry(entry: &RegisteredField) -> Option<Shared<Self>>;
}

macro_rules! registry_entry {
    ($ty:ty, $variant:ident, $kind:literal) => {
        impl RegistryEntry for $ty {
            const KIND: &'static str = $kind;

            fn entry_name(&self) -> &str {
                self.name()
            }

            fn wrap(field: Shared<Self>) -> RegisteredField {
                RegisteredField::$variant(field)
            }

            fn unwrap_entry(entry: &RegisteredField) -> Option<Shared<Self>> {
                match entry {
                    RegisteredField::$variant(f) => Some(Arc::clone(f)),
                    _ => None,
                }
            }
        }
    };
}

registry_entry!(VolField<Real>, VolScalar, "volScalarField");
registry_entry!(VolField<Vector>, VolVector, "volVectorField");
registry_entry!(SurfaceField<Real>, SurfaceScalar, "surfaceScalarField");
registry_entry!(SurfaceField<Vector>, SurfaceVector, "surfaceVectorField");

/// Name-indexed store of shared fields.
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    objects: RwLock<BTreeMap<String, RegisteredField>>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field under its own name, replacing any previous entry.
    pub fn register<F: RegistryEntry>(&self, field: F) -> Shared<F> {
        let name = field.entry_name().to_string();
        let handle = shared(field);
        self.register_shared(name, Arc::clone(&handle));
        handle
    }

    /// Register an existing handle under `name`.
    pub fn register_shared<F: RegistryEntry>(&self, name: impl Into<String>, field: Shared<F>) {
        let name = name.into();
        trace!(name = %name, kind = F::KIND, "registering field");
        self.objects_mut().insert(name, F::wrap(field));
    }

    /// Look up a field by name and type.
    pub fn lookup<F: RegistryEntry>(&self, name: &str) -> FieldResult<Shared<F>> {
        let objects = self.objects.read().unwrap_or_else(PoisonError::into_inner);
        let entry = objects.get(name).ok_or_else(|| FieldError::NotFound {
            kind: F::KIND,
            name: name.to_string(),
        })?;
        F::unwrap_entry(entry).ok_or_else(|| FieldError::TypeMismatch {
            name: name.to_string(),
            expected: F::KIND,
            actual: entry.kind(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    pub fn remove(&self, name: &str) -> Option<RegisteredField> {
        self.objects_mut().remove(name)
    }

    fn objects_mut(&self) -> RwLockWriteGuard<'_, BTreeMap<String, RegisteredField>> {
        self.objects.write().unwrap_or_else(PoisonError::into_inner)
    }
}
