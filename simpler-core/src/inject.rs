//! Sub-job injection
//!
//! Parent jobs declare their sub-job members through [`Job::sub_jobs`], in
//! declaration order, each with a factory. An injection pass walks that list
//! and binds a fresh instance into every member that is still unbound. Members
//! that already hold an instance (for example a stub seeded by a test) are
//! left untouched.
//!
//! Binding is decided per member, never per type: two members of the same
//! sub-job type each receive their own instance.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{JobError, Result};
use crate::invoke::Invoke;
use crate::job::Job;

/// One member bound during an injection pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Injected {
    /// Name of the parent's member
    pub member: &'static str,
    /// Fully-qualified type name of the sub-job that was constructed
    pub job_type: &'static str,
}

/// Ordered list of the sub-jobs freshly constructed by one injection pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InjectionRecord {
    entries: Vec<Injected>,
}

impl InjectionRecord {
    pub fn entries(&self) -> &[Injected] {
        &self.entries
    }

    /// Type names in injection order
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.job_type)
    }

    /// Member names in injection order
    pub fn members(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.member)
    }

    pub fn contains_type(&self, job_type: &str) -> bool {
        self.entries.iter().any(|entry| entry.job_type == job_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Type-erased handle on one declared member of parent `P`
trait SubJobSlot<P> {
    fn member(&self) -> &'static str;

    fn job_type(&self) -> &'static str;

    /// Binds a fresh instance if the member is unbound; returns whether it did
    fn inject(&self, parent: &mut P) -> Result<bool>;
}

struct InvokerSlot<P, J> {
    member: &'static str,
    access: fn(&mut P) -> &mut Invoke<J>,
    factory: fn() -> anyhow::Result<J>,
}

impl<P, J: Job> SubJobSlot<P> for InvokerSlot<P, J> {
    fn member(&self) -> &'static str {
        self.member
    }

    fn job_type(&self) -> &'static str {
        std::any::type_name::<J>()
    }

    fn inject(&self, parent: &mut P) -> Result<bool> {
        let invoker = (self.access)(parent);
        if invoker.is_bound() {
            return Ok(false);
        }

        let job = (self.factory)().map_err(|e| JobError::Construction {
            job: self.job_type(),
            member: self.member,
            reason: format!("{:#}", e),
        })?;
        invoker.bind(job);
        Ok(true)
    }
}

fn construct_default<J: Default>() -> anyhow::Result<J> {
    Ok(J::default())
}

/// Registry of the sub-job members declared by parent job type `P`
///
/// # Example
///
/// ```rust
/// use simpler_core::{Invoke, Job, Result, SubJobs};
///
/// #[derive(Default)]
/// struct Ping;
///
/// impl Job for Ping {
///     fn execute(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// #[derive(Default)]
/// struct Parent {
///     ping: Invoke<Ping>,
/// }
///
/// impl Job for Parent {
///     fn execute(&mut self) -> Result<()> {
///         self.ping.get()?;
///         Ok(())
///     }
///
///     fn sub_jobs() -> Option<SubJobs<Self>> {
///         Some(SubJobs::new().invoker("ping", |parent: &mut Parent| &mut parent.ping))
///     }
/// }
///
/// let mut parent = Parent::default();
/// let record = simpler_core::inject_sub_jobs(&mut parent).unwrap();
/// assert_eq!(record.len(), 1);
/// ```
pub struct SubJobs<P> {
    slots: Vec<Box<dyn SubJobSlot<P>>>,
}

impl<P: 'static> SubJobs<P> {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Declares a member constructed with `J::default()`
    pub fn invoker<J>(self, member: &'static str, access: fn(&mut P) -> &mut Invoke<J>) -> Self
    where
        J: Job + Default + 'static,
    {
        self.invoker_with(member, access, construct_default::<J>)
    }

    /// Declares a member constructed by a fallible `factory`
    ///
    /// A factory error aborts the injection pass with
    /// [`JobError::Construction`].
    pub fn invoker_with<J>(
        mut self,
        member: &'static str,
        access: fn(&mut P) -> &mut Invoke<J>,
        factory: fn() -> anyhow::Result<J>,
    ) -> Self
    where
        J: Job + 'static,
    {
        self.slots.push(Box::new(InvokerSlot {
            member,
            access,
            factory,
        }));
        self
    }

    /// Declared member names, in declaration order
    pub fn members(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.iter().map(|slot| slot.member())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Runs one injection pass over `parent`
    ///
    /// Every declared member is visited exactly once. Sub-jobs are bound but
    /// never executed here.
    ///
    /// # Errors
    /// Stops at the first member whose factory fails. Members bound earlier in
    /// the same pass keep their new instances.
    pub fn inject(&self, parent: &mut P) -> Result<InjectionRecord> {
        let mut record = InjectionRecord::default();

        for slot in &self.slots {
            if slot.inject(parent)? {
                debug!("Injected {} into member '{}'", slot.job_type(), slot.member());
                record.entries.push(Injected {
                    member: slot.member(),
                    job_type: slot.job_type(),
                });
            } else {
                debug!("Member '{}' already bound, skipping", slot.member());
            }
        }

        info!(
            "Injection pass over {} bound {}/{} sub-job member(s)",
            std::any::type_name::<P>(),
            record.len(),
            self.slots.len()
        );

        Ok(record)
    }
}

impl<P: 'static> Default for SubJobs<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs an injection pass over `parent` using its declared sub-jobs
///
/// Jobs that declare no sub-jobs yield an empty record without any work.
pub fn inject_sub_jobs<P: Job + 'static>(parent: &mut P) -> Result<InjectionRecord> {
    match P::sub_jobs() {
        Some(sub_jobs) => sub_jobs.inject(parent),
        None => Ok(InjectionRecord::default()),
    }
}
