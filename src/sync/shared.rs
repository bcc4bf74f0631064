//! ISR-safe PHY wrapper using critical sections.
//!
//! Provides [`SharedPhy`], which serializes every driver call against one
//! device, for firmware that polls the link from more than one context.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::error::Result;
use crate::hal::mdio::MdioBus;
use crate::phy::{LinkChange, LinkStatus, PhyHandle};

/// Attached PHY together with the bus it lives on
type Slot<M> = Option<(PhyHandle<M>, M)>;

/// ISR-safe PHY wrapper using critical sections.
///
/// Owns an attached [`PhyHandle`] together with its bus. All access goes
/// through `critical_section::with()`, disabling interrupts for the duration
/// of the closure. A static `SharedPhy<M>` is `Sync` whenever `M: Send`.
///
/// # Example
///
/// ```ignore
/// static PHY: SharedPhy<MyMdio> = SharedPhy::new();
///
/// let phy = registry.attach(&mut mdio, 8, PhyInterface::Sgmii)?;
/// PHY.install(phy, mdio);
///
/// // From a timer interrupt
/// if let Some(Ok(LinkChange::Up(status))) = PHY.poll_link() {
///     mac.set_link(status);
/// }
/// ```
pub struct SharedPhy<M: MdioBus> {
    inner: Mutex<RefCell<Slot<M>>>,
}

impl<M: MdioBus> SharedPhy<M> {
    /// Create an empty wrapper (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    fn with_slot<R>(&self, f: impl FnOnce(&mut Slot<M>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    fn with_slot_ref<R>(&self, f: impl FnOnce(&Slot<M>) -> R) -> R {
        critical_section::with(|cs| f(&self.inner.borrow_ref(cs)))
    }

    /// Install an attached PHY and its bus, returning any previous pair.
    pub fn install(&self, phy: PhyHandle<M>, mdio: M) -> Option<(PhyHandle<M>, M)> {
        self.with_slot(|slot| slot.replace((phy, mdio)))
    }

    /// Remove the PHY and its bus.
    pub fn take(&self) -> Option<(PhyHandle<M>, M)> {
        self.with_slot(Option::take)
    }

    /// Whether a PHY is installed.
    pub fn is_installed(&self) -> bool {
        self.with_slot_ref(Option::is_some)
    }

    /// Execute a closure with exclusive access to the PHY and bus.
    ///
    /// Returns `None` if nothing is installed.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut PhyHandle<M>, &mut M) -> R,
    {
        self.with_slot(|slot| slot.as_mut().map(|(phy, mdio)| f(phy, mdio)))
    }

    /// Try to execute a closure, returning `None` if already borrowed or
    /// nothing is installed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut PhyHandle<M>, &mut M) -> R,
    {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).try_borrow_mut().ok()?;
            slot.as_mut().map(|(phy, mdio)| f(phy, mdio))
        })
    }

    /// Poll the link; `None` if nothing is installed.
    pub fn poll_link(&self) -> Option<Result<LinkChange>> {
        self.with(|phy, mdio| phy.poll_link(mdio))
    }

    /// Last decoded link without touching the bus.
    pub fn link_status(&self) -> Option<LinkStatus> {
        self.with_slot_ref(|slot| slot.as_ref().and_then(|(phy, _)| phy.link_status()))
    }
}

impl<M: MdioBus> Default for SharedPhy<M> {
    fn default() -> Self {
        Self::new()
    }
}
