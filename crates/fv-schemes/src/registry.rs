//! Run-time selection of interpolation schemes by name.

use std::collections::BTreeMap;

use fv_fields::{FieldValue, Interpolable, Shared, SurfaceField};
use tracing::trace;

use crate::cell_co_blended::CellCoBlended;
use crate::co_blended::CoBlended;
use crate::context::SchemeContext;
use crate::error::SchemeResult;
use crate::fixed_blended::FixedBlended;
use crate::linear::{Linear, MidPoint};
use crate::linear_upwind::{LinearUpwind, Lust};
use crate::local_extremum::{LocalMax, LocalMin};
use crate::stream::SchemeStream;
use crate::traits::InterpolationScheme;
use crate::upwind::{Downwind, Upwind};

/// Everything a scheme constructor receives.
pub struct SchemeArgs<'a, T> {
    pub ctx: &'a SchemeContext,
    pub registry: &'a SchemeRegistry<T>,
    /// Face flux bound by the caller, if any.
    pub flux: Option<Shared<SurfaceField<f64>>>,
    /// Remaining parameters of the scheme entry.
    pub stream: &'a mut SchemeStream,
}

impl<T: FieldValue> SchemeArgs<'_, T> {
    /// The bound face flux, or one looked up by a name read from the stream.
    pub fn face_flux(&mut self) -> SchemeResult<Shared<SurfaceField<f64>>> {
        match &self.flux {
            Some(flux) => Ok(flux.clone()),
            None => {
                let name = self.stream.read_word("face flux field name")?;
                self.ctx.lookup_flux(&name)
            }
        }
    }

    /// Resolve a nested scheme entry from the stream, passing on the
    /// bound flux.
    pub fn sub_scheme(&mut self) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        self.registry
            .construct(self.ctx, self.flux.clone(), self.stream)
    }
}

/// Constructor registered under a scheme name.
pub type SchemeConstructor<T> =
    fn(SchemeArgs<'_, T>) -> SchemeResult<Box<dyn InterpolationScheme<T>>>;

/// Name to constructor table for schemes over `T` values.
pub struct SchemeRegistry<T> {
    constructors: BTreeMap<&'static str, SchemeConstructor<T>>,
}

impl<T: FieldValue> SchemeRegistry<T> {
    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Add or replace a constructor.
    pub fn register(&mut self, name: &'static str, constructor: SchemeConstructor<T>) -> &mut Self {
        self.constructors.insert(name, constructor);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.constructors.keys().copied().collect()
    }

    /// Construct a scheme from `<name> <params...>`; the scheme finds its
    /// own flux by name if it needs one.
    pub fn resolve(
        &self,
        ctx: &SchemeContext,
        stream: &mut SchemeStream,
    ) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        self.construct(ctx, None, stream)
    }

    /// Construct a scheme from `<name> <params...>` with the face flux bound.
    pub fn resolve_with_flux(
        &self,
        ctx: &SchemeContext,
        flux: Shared<SurfaceField<f64>>,
        stream: &mut SchemeStream,
    ) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        self.construct(ctx, Some(flux), stream)
    }

    /// Construct from a complete scheme entry; trailing tokens are an error.
    pub fn resolve_str(
        &self,
        ctx: &SchemeContext,
        entry: &str,
        text: &str,
    ) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        let mut stream = SchemeStream::new(entry, text);
        let scheme = self.resolve(ctx, &mut stream)?;
        stream.expect_end()?;
        Ok(scheme)
    }

    pub(crate) fn construct(
        &self,
        ctx: &SchemeContext,
        flux: Option<Shared<SurfaceField<f64>>>,
        stream: &mut SchemeStream,
    ) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        let location = stream.location();
        let name = stream.read_word("interpolation scheme name")?;
        let constructor = self.constructors.get(name.as_str()).ok_or_else(|| {
            crate::error::SchemeError::Configuration {
                message: format!(
                    "unknown {} interpolation scheme '{name}'; valid schemes are: {}",
                    T::TYPE_NAME,
                    self.names().join(" ")
                ),
                location,
            }
        })?;
        trace!(scheme = %name, with_flux = flux.is_some(), "constructing interpolation scheme");
        constructor(SchemeArgs {
            ctx,
            registry: self,
            flux,
            stream,
        })
    }
}

impl<T: Interpolable> SchemeRegistry<T> {
    /// Registry with every built-in scheme.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry
            .register("linear", Linear::construct)
            .register("midPoint", MidPoint::construct)
            .register("upwind", Upwind::construct)
            .register("downwind", Downwind::construct)
            .register("localMax", LocalMax::construct)
            .register("localMin", LocalMin::construct)
            .register("linearUpwind", LinearUpwind::construct)
            .register("LUST", Lust::construct)
            .register("fixedBlended", FixedBlended::construct)
            .register("CoBlended", CoBlended::construct)
            .register("cellCoBlended", CellCoBlended::construct);
        registry
    }
}

impl<T: Interpolable> Default for SchemeRegistry<T> {
    fn default() -> Self {
        Self::standard()
    }
}
