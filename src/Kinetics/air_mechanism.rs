//! Reduced humid air mechanism.
//!
//! Rate coefficients are in SI units: s^-1 for first order, m^3/s for two-body and m^6/s for three-body
//! reactions. Temperatures in the laws are in Kelvin. Electron impact channels on the background gases
//! and on the main radicals are driven by the BOLSIG+ table and keep their table numbers R625..R673;
//! channels with an electron on both sides and no other change are energy-loss channels.
use crate::Kinetics::errors::KineticsError;
use crate::Kinetics::kinetics::RateLaw;
use crate::Kinetics::mechanism::{Mechanism, Reaction};
use crate::Kinetics::species::*;

const fn r(number: u32, reactants: &[usize], products: &[usize], law: RateLaw) -> Reaction {
    Reaction::new(number, reactants, products, law)
}
const fn k(a: f64) -> RateLaw {
    RateLaw::constant(a)
}
const fn tg(a: f64, n: f64, ea: f64) -> RateLaw {
    RateLaw::gas(a, n, ea)
}
const fn te(a: f64, n: f64) -> RateLaw {
    RateLaw::electron(a, n, 0.0)
}
const fn tt(a: f64, ng: f64, ne: f64, eg: f64, ee: f64) -> RateLaw {
    RateLaw::two_temperature(a, ng, ne, eg, ee)
}
const fn bolsig(number: u32) -> RateLaw {
    RateLaw::table(number)
}

/// first and last number of the table-driven channels
pub const TABLE_REACTIONS: (u32, u32) = (625, 673);

pub static AIR_REACTIONS: &[Reaction] = &[
    // electron-ion recombination
    r(1, &[E, N2_ION], &[N, N_2D], te(1.8e-13, -0.39)),
    r(2, &[E, O2_ION], &[O, O], te(1.2e-13, -0.7)),
    r(3, &[E, O2_ION], &[O, O_1D], te(1.5e-13, -0.7)),
    r(4, &[E, NO_ION], &[N, O], te(0.8e-13, -0.5)),
    r(5, &[E, NO_ION], &[N_2D, O], te(3.4e-13, -0.5)),
    r(6, &[E, N3_ION], &[N2, N], te(2.0e-13, -0.5)),
    r(7, &[E, N4_ION], &[N2, N2], te(2.3e-12, -0.53)),
    r(8, &[E, O4_ION], &[O2, O2], te(1.4e-12, -0.5)),
    r(9, &[E, N2O_ION], &[N2, O], te(2.0e-13, -0.5)),
    r(10, &[E, NO2_ION], &[NO, O], te(2.0e-13, -0.5)),
    r(11, &[E, H2O_ION], &[OH, H], te(2.6e-13, -0.5)),
    r(12, &[E, H2O_ION], &[O, H2], te(0.4e-13, -0.5)),
    r(13, &[E, H3O_ION], &[H2O, H], te(4.3e-13, -0.5)),
    r(14, &[E, H3O_ION], &[OH, H2], te(0.8e-13, -0.5)),
    r(15, &[E, OH_ION], &[O, H], te(3.75e-14, -0.5)),
    r(16, &[E, H2_ION], &[H, H], te(2.3e-13, -0.4)),
    r(17, &[E, H3_ION], &[H2, H], te(2.3e-13, -0.5)),
    r(18, &[E, H_ION, M], &[H, M], te(6.0e-39, -1.5)),
    r(19, &[E, E, N2_ION], &[N2, E], te(1.0e-31, -4.5)),
    r(20, &[E, E, O2_ION], &[O2, E], te(1.0e-31, -4.5)),
    r(21, &[E, E, NO_ION], &[NO, E], te(1.0e-31, -4.5)),
    r(22, &[E, N2_ION, M], &[N2, M], te(6.0e-39, -1.5)),
    r(23, &[E, O2_ION, M], &[O2, M], te(6.0e-39, -1.5)),
    r(24, &[E, NO_ION, M], &[NO, M], te(6.0e-39, -1.5)),
    r(25, &[E, N_ION, M], &[N, M], te(6.0e-39, -1.5)),
    r(26, &[E, O_ION, M], &[O, M], te(6.0e-39, -1.5)),
    // attachment
    r(27, &[E, O2, O2], &[O2_NEG, O2], tt(1.4e-41, 0.0, -1.0, -100.0, 700.0)),
    r(28, &[E, O2, N2], &[O2_NEG, N2], tt(1.07e-43, 0.0, -2.0, -1430.0, 1500.0)),
    r(29, &[E, O2, H2O], &[O2_NEG, H2O], tt(1.4e-41, 0.0, -1.0, -100.0, 700.0)),
    r(30, &[E, O, O2], &[O_NEG, O2], k(1.0e-43)),
    r(31, &[E, O, O2], &[O2_NEG, O], k(1.0e-43)),
    r(32, &[E, NO, M], &[NO_NEG, M], k(8.0e-43)),
    r(33, &[E, N2O], &[O_NEG, N2], RateLaw::electron(2.0e-16, 0.0, 5000.0)),
    r(34, &[E, NO2], &[O_NEG, NO], k(1.0e-17)),
    r(35, &[E, NO3, M], &[NO3_NEG, M], k(1.0e-42)),
    r(36, &[E, O3, M], &[O3_NEG, M], k(1.0e-43)),
    r(37, &[E, HNO3], &[NO2_NEG, OH], k(5.0e-14)),
    r(38, &[E, H2O2], &[OH_NEG, OH], k(1.0e-15)),
    r(39, &[E, OH, M], &[OH_NEG, M], k(1.0e-42)),
    // detachment
    r(40, &[O_NEG, O], &[O2, E], k(1.4e-16)),
    r(41, &[O_NEG, N], &[NO, E], k(2.6e-16)),
    r(42, &[O_NEG, NO], &[NO2, E], k(2.6e-16)),
    r(43, &[O_NEG, O2_A], &[O3, E], k(3.0e-16)),
    r(44, &[O_NEG, N2], &[N2O, E], k(1.0e-18)),
    r(45, &[O_NEG, H2], &[H2O, E], k(7.0e-16)),
    r(46, &[O_NEG, N2_A], &[O, N2, E], k(2.2e-15)),
    r(47, &[O_NEG, N2_B], &[O, N2, E], k(1.9e-15)),
    r(48, &[O2_NEG, O], &[O3, E], k(1.5e-16)),
    r(49, &[O2_NEG, N], &[NO2, E], k(5.0e-16)),
    r(50, &[O2_NEG, O2_A], &[O2, O2, E], k(2.0e-16)),
    r(51, &[O2_NEG, N2_A], &[O2, N2, E], k(2.1e-15)),
    r(52, &[O2_NEG, N2_B], &[O2, N2, E], k(2.5e-15)),
    r(53, &[O2_NEG, M], &[O2, E, M], tg(2.7e-16, 0.5, 5590.0)),
    r(54, &[O3_NEG, O], &[O2, O2, E], k(3.0e-16)),
    r(55, &[OH_NEG, O], &[HO2, E], k(2.0e-16)),
    r(56, &[OH_NEG, H], &[H2O, E], k(1.4e-15)),
    r(57, &[H_NEG, H], &[H2, E], k(1.3e-15)),
    r(58, &[H_NEG, O2], &[HO2, E], k(1.2e-15)),
    r(59, &[NO_NEG, M], &[NO, E, M], k(2.4e-19)),
    r(60, &[O_NEG, M], &[O, E, M], tg(4.0e-18, 0.0, 7300.0)),
    // negative ion conversion
    r(61, &[O_NEG, O2, M], &[O3_NEG, M], tg(1.1e-42, -1.0, 0.0)),
    r(62, &[O_NEG, O2_A], &[O2_NEG, O], k(1.0e-16)),
    r(63, &[O_NEG, O3], &[O3_NEG, O], k(8.0e-16)),
    r(64, &[O_NEG, NO2], &[NO2_NEG, O], k(1.2e-15)),
    r(65, &[O_NEG, N2O], &[NO_NEG, NO], k(2.0e-16)),
    r(66, &[O_NEG, N2O], &[N2O_NEG, O], k(2.0e-18)),
    r(67, &[O_NEG, H2O], &[OH_NEG, OH], k(1.4e-15)),
    r(68, &[O_NEG, HNO3], &[NO3_NEG, OH], k(3.6e-15)),
    r(69, &[O2_NEG, O], &[O_NEG, O2], k(3.3e-16)),
    r(70, &[O2_NEG, O3], &[O3_NEG, O2], k(3.5e-16)),
    r(71, &[O2_NEG, NO2], &[NO2_NEG, O2], k(7.0e-16)),
    r(72, &[O2_NEG, NO3], &[NO3_NEG, O2], k(5.0e-16)),
    r(73, &[O2_NEG, O2, M], &[O4_NEG, M], tg(3.5e-43, -1.0, 0.0)),
    r(74, &[O2_NEG, HNO3], &[NO3_NEG, HO2], k(2.8e-15)),
    r(75, &[O3_NEG, O], &[O2_NEG, O2], k(1.0e-17)),
    r(76, &[O3_NEG, NO], &[NO3_NEG, O], k(1.0e-17)),
    r(77, &[O3_NEG, NO], &[NO2_NEG, O2], k(2.6e-18)),
    r(78, &[O3_NEG, NO2], &[NO2_NEG, O3], k(7.0e-16)),
    r(79, &[O3_NEG, NO2], &[NO3_NEG, O2], k(2.0e-19)),
    r(80, &[O3_NEG, NO3], &[NO3_NEG, O3], k(5.0e-16)),
    r(81, &[O4_NEG, O], &[O3_NEG, O2], k(4.0e-16)),
    r(82, &[O4_NEG, O], &[O_NEG, O2, O2], k(3.0e-16)),
    r(83, &[O4_NEG, O2_A], &[O2_NEG, O2, O2], k(1.0e-16)),
    r(84, &[O4_NEG, M], &[O2_NEG, O2, M], tg(1.0e-16, 0.0, 1044.0)),
    r(85, &[O4_NEG, NO], &[NO3_NEG, O2], k(2.5e-16)),
    r(86, &[NO_NEG, O2], &[O2_NEG, NO], k(5.0e-16)),
    r(87, &[NO_NEG, NO2], &[NO2_NEG, NO], k(7.4e-16)),
    r(88, &[NO_NEG, N2O], &[NO2_NEG, N2], k(2.8e-20)),
    r(89, &[N2O_NEG, M], &[O_NEG, N2, M], k(1.0e-18)),
    r(90, &[NO2_NEG, O3], &[NO3_NEG, O2], k(1.8e-17)),
    r(91, &[NO2_NEG, NO2], &[NO3_NEG, NO], k(4.0e-18)),
    r(92, &[NO2_NEG, N2O5], &[NO3_NEG, NO2, NO2], k(7.0e-16)),
    r(93, &[NO2_NEG, HNO3], &[NO3_NEG, HNO2], k(1.6e-15)),
    r(94, &[OH_NEG, NO2], &[NO2_NEG, OH], k(1.1e-15)),
    r(95, &[OH_NEG, O3], &[O3_NEG, OH], k(9.0e-16)),
    r(96, &[OH_NEG, HNO3], &[NO3_NEG, H2O], k(1.0e-15)),
    r(97, &[H_NEG, H2O], &[OH_NEG, H2], k(3.8e-15)),
    r(98, &[O_NEG, H2], &[OH_NEG, H], k(3.3e-17)),
    // positive ion conversion
    r(99, &[N_ION, O2], &[O2_ION, N], k(2.8e-16)),
    r(100, &[N_ION, O2], &[NO_ION, O], k(2.5e-16)),
    r(101, &[N_ION, O2], &[O_ION, NO], k(2.8e-17)),
    r(102, &[N_ION, N2, M], &[N3_ION, M], tg(1.7e-41, -2.1, 0.0)),
    r(103, &[N_ION, NO], &[NO_ION, N], k(8.0e-16)),
    r(104, &[N_ION, H2O], &[H2O_ION, N], k(2.8e-15)),
    r(105, &[N2_ION, O2], &[O2_ION, N2], tg(6.0e-17, -0.5, 0.0)),
    r(106, &[N2_ION, N2, M], &[N4_ION, M], tg(5.2e-41, -2.2, 0.0)),
    r(107, &[N2_ION, O], &[NO_ION, N], tg(1.3e-16, -0.5, 0.0)),
    r(108, &[N2_ION, O], &[O_ION, N2], tg(1.0e-17, -0.2, 0.0)),
    r(109, &[N2_ION, NO], &[NO_ION, N2], k(3.3e-16)),
    r(110, &[N2_ION, N2O], &[N2O_ION, N2], k(5.0e-16)),
    r(111, &[N2_ION, H2O], &[H2O_ION, N2], k(2.2e-15)),
    r(112, &[N3_ION, O2], &[O2_ION, N, N2], k(2.3e-17)),
    r(113, &[N3_ION, N], &[N2_ION, N2], k(6.6e-17)),
    r(114, &[N3_ION, NO], &[NO_ION, N, N2], k(7.0e-17)),
    r(115, &[N3_ION, H2O], &[H2O_ION, N, N2], k(1.0e-15)),
    r(116, &[N4_ION, O2], &[O2_ION, N2, N2], k(2.5e-16)),
    r(117, &[N4_ION, N2], &[N2_ION, N2, N2], k(1.0e-20)),
    r(118, &[N4_ION, N], &[N_ION, N2, N2], k(1.0e-17)),
    r(119, &[N4_ION, O], &[O_ION, N2, N2], k(2.5e-16)),
    r(120, &[N4_ION, NO], &[NO_ION, N2, N2], k(4.0e-16)),
    r(121, &[N4_ION, H2O], &[H2O_ION, N2, N2], k(3.0e-15)),
    r(122, &[O_ION, N2], &[NO_ION, N], k(1.2e-18)),
    r(123, &[O_ION, O2], &[O2_ION, O], tg(2.0e-17, -0.5, 0.0)),
    r(124, &[O_ION, NO], &[NO_ION, O], k(2.4e-17)),
    r(125, &[O_ION, NO2], &[NO2_ION, O], k(1.6e-15)),
    r(126, &[O_ION, N2O], &[NO_ION, NO], k(6.3e-16)),
    r(127, &[O_ION, N2O], &[N2O_ION, O], k(2.3e-16)),
    r(128, &[O_ION, H2O], &[H2O_ION, O], k(3.2e-15)),
    r(129, &[O_ION, N2, M], &[NO_ION, N, M], tg(6.0e-41, -2.0, 0.0)),
    r(130, &[O2_ION, O2, M], &[O4_ION, M], tg(2.4e-42, -3.2, 0.0)),
    r(131, &[O2_ION, N], &[NO_ION, O], k(1.2e-16)),
    r(132, &[O2_ION, NO], &[NO_ION, O2], k(6.3e-16)),
    r(133, &[O2_ION, NO2], &[NO2_ION, O2], k(6.6e-16)),
    r(134, &[O4_ION, O], &[O2_ION, O3], k(3.0e-16)),
    r(135, &[O4_ION, O2], &[O2_ION, O2, O2], tg(3.3e-12, -4.0, 5030.0)),
    r(136, &[O4_ION, O2_A], &[O2_ION, O2, O2], k(1.0e-16)),
    r(137, &[O4_ION, NO], &[NO_ION, O2, O2], k(1.0e-16)),
    r(138, &[O4_ION, H2O], &[H2O_ION, O2, O2], k(1.5e-15)),
    r(139, &[NO_ION, O3], &[NO2_ION, O2], k(1.0e-21)),
    r(140, &[NO_ION, N2O5], &[NO2_ION, NO2, NO2], k(5.9e-16)),
    r(141, &[N2O_ION, NO], &[NO_ION, N2O], k(2.9e-16)),
    r(142, &[N2O_ION, O2], &[O2_ION, N2O], k(2.2e-16)),
    r(143, &[NO2_ION, NO], &[NO_ION, NO2], k(2.9e-16)),
    r(144, &[H_ION, O2], &[O2_ION, H], k(1.2e-15)),
    r(145, &[H_ION, H2O], &[H2O_ION, H], k(8.2e-15)),
    r(146, &[H2_ION, H2], &[H3_ION, H], k(2.1e-15)),
    r(147, &[H2_ION, H2O], &[H2O_ION, H2], k(3.9e-15)),
    r(148, &[H2_ION, H2O], &[H3O_ION, H], k(3.4e-15)),
    r(149, &[H3_ION, H2O], &[H3O_ION, H2], k(5.3e-15)),
    r(150, &[OH_ION, H2O], &[H2O_ION, OH], k(1.6e-15)),
    r(151, &[OH_ION, H2O], &[H3O_ION, O], k(1.3e-15)),
    r(152, &[OH_ION, O2], &[O2_ION, OH], k(5.9e-16)),
    r(153, &[H2O_ION, H2O], &[H3O_ION, OH], k(1.8e-15)),
    r(154, &[H2O_ION, O2], &[O2_ION, H2O], k(4.3e-16)),
    r(155, &[H2O_ION, NO], &[NO_ION, H2O], k(4.6e-16)),
    r(156, &[H2O_ION, H2], &[H3O_ION, H], k(7.6e-16)),
    // ion-ion recombination, two body
    r(157, &[O2_NEG, N2_ION], &[O2, N2], tg(2.0e-13, -0.5, 0.0)),
    r(158, &[O2_NEG, O2_ION], &[O2, O2], tg(2.0e-13, -0.5, 0.0)),
    r(159, &[O2_NEG, NO_ION], &[O2, NO], tg(2.0e-13, -0.5, 0.0)),
    r(160, &[O2_NEG, N4_ION], &[O2, N2, N2], k(1.0e-13)),
    r(161, &[O2_NEG, O4_ION], &[O2, O2, O2], k(1.0e-13)),
    r(162, &[O2_NEG, H3O_ION], &[O2, H2O, H], tg(2.0e-13, -0.5, 0.0)),
    r(163, &[O_NEG, N2_ION], &[O, N2], tg(2.0e-13, -0.5, 0.0)),
    r(164, &[O_NEG, O2_ION], &[O, O2], tg(2.0e-13, -0.5, 0.0)),
    r(165, &[O_NEG, NO_ION], &[O, NO], tg(2.0e-13, -0.5, 0.0)),
    r(166, &[O_NEG, N_ION], &[O, N], tg(2.0e-13, -0.5, 0.0)),
    r(167, &[O_NEG, O_ION], &[O, O], tg(2.0e-13, -0.5, 0.0)),
    r(168, &[O_NEG, H3O_ION], &[OH, H2O], tg(2.0e-13, -0.5, 0.0)),
    r(169, &[O3_NEG, O2_ION], &[O3, O2], tg(2.0e-13, -0.5, 0.0)),
    r(170, &[O3_NEG, NO_ION], &[O3, NO], tg(2.0e-13, -0.5, 0.0)),
    r(171, &[O4_NEG, O2_ION], &[O2, O2, O2], k(1.0e-13)),
    r(172, &[O4_NEG, O4_ION], &[O2, O2, O2, O2], k(1.0e-13)),
    r(173, &[NO_NEG, NO_ION], &[NO, NO], tg(2.0e-13, -0.5, 0.0)),
    r(174, &[NO2_NEG, NO_ION], &[NO2, NO], tg(2.0e-13, -0.5, 0.0)),
    r(175, &[NO2_NEG, O2_ION], &[NO2, O2], tg(2.0e-13, -0.5, 0.0)),
    r(176, &[NO2_NEG, H3O_ION], &[HNO2, H2O], tg(2.0e-13, -0.5, 0.0)),
    r(177, &[NO3_NEG, NO_ION], &[NO3, NO], tg(2.0e-13, -0.5, 0.0)),
    r(178, &[NO3_NEG, O2_ION], &[NO3, O2], tg(2.0e-13, -0.5, 0.0)),
    r(179, &[NO3_NEG, H3O_ION], &[HNO3, H2O], tg(2.0e-13, -0.5, 0.0)),
    r(180, &[NO3_NEG, N2_ION], &[NO3, N2], tg(2.0e-13, -0.5, 0.0)),
    r(181, &[OH_NEG, H3O_ION], &[H2O, H2O], tg(2.0e-13, -0.5, 0.0)),
    r(182, &[OH_NEG, NO_ION], &[HNO2], tg(2.0e-13, -0.5, 0.0)),
    r(183, &[OH_NEG, O2_ION], &[OH, O2], tg(2.0e-13, -0.5, 0.0)),
    r(184, &[H_NEG, H3O_ION], &[H2O, H2], tg(2.0e-13, -0.5, 0.0)),
    r(185, &[N2O_NEG, NO_ION], &[N2O, NO], tg(2.0e-13, -0.5, 0.0)),
    r(186, &[O2_NEG, H2O_ION], &[O2, H2O], tg(2.0e-13, -0.5, 0.0)),
    r(187, &[NO3_NEG, N4_ION], &[NO3, N2, N2], k(1.0e-13)),
    // ion-ion recombination, three body
    r(188, &[O2_NEG, O2_ION, M], &[O2, O2, M], tg(2.0e-37, -2.5, 0.0)),
    r(189, &[O2_NEG, NO_ION, M], &[NO, O2, M], tg(2.0e-37, -2.5, 0.0)),
    r(190, &[O_NEG, O2_ION, M], &[O3, M], tg(2.0e-37, -2.5, 0.0)),
    r(191, &[O_NEG, NO_ION, M], &[NO2, M], tg(2.0e-37, -2.5, 0.0)),
    r(192, &[NO2_NEG, NO_ION, M], &[NO2, NO, M], tg(2.0e-37, -2.5, 0.0)),
    r(193, &[NO3_NEG, NO_ION, M], &[NO3, NO, M], tg(2.0e-37, -2.5, 0.0)),
    r(194, &[NO3_NEG, H3O_ION, M], &[HNO3, H2O, M], tg(2.0e-37, -2.5, 0.0)),
    r(195, &[O2_NEG, N2_ION, M], &[O2, N2, M], tg(2.0e-37, -2.5, 0.0)),
    // excited states
    r(196, &[N2_A, O2], &[N2, O, O], k(2.54e-18)),
    r(197, &[N2_A, O2], &[N2, O2_A], k(1.29e-18)),
    r(198, &[N2_A, O], &[NO, N_2D], k(7.0e-18)),
    r(199, &[N2_A, O], &[N2, O_1D], k(2.1e-17)),
    r(200, &[N2_A, N], &[N2, N], k(2.0e-18)),
    r(201, &[N2_A, NO], &[N2, NO], k(6.9e-17)),
    r(202, &[N2_A, N2_A], &[N2, N2_B], k(7.7e-17)),
    r(203, &[N2_A, H2O], &[N2, OH, H], k(5.0e-20)),
    r(204, &[N2_A, N2O], &[N2, N2, O], k(1.0e-17)),
    r(205, &[N2_A, N2], &[N2, N2], k(3.0e-22)),
    r(206, &[N2_B, N2], &[N2_A, N2], k(1.0e-17)),
    r(207, &[N2_B, O2], &[N2, O, O], k(3.0e-16)),
    r(208, &[N2_B], &[N2_A], k(1.5e5)),
    r(209, &[N2_B, H2O], &[N2, OH, H], k(3.0e-16)),
    r(210, &[N_2D, O2], &[NO, O], k(1.5e-18)),
    r(211, &[N_2D, O2], &[NO, O_1D], k(6.0e-18)),
    r(212, &[N_2D, N2], &[N, N2], k(6.0e-21)),
    r(213, &[N_2D, NO], &[N2, O], k(6.0e-17)),
    r(214, &[N_2D, O], &[N, O], k(1.0e-18)),
    r(215, &[N_2D, N2O], &[NO, N2], k(3.5e-18)),
    r(216, &[O_1D, N2], &[O, N2], tg(1.8e-17, 0.0, -107.0)),
    r(217, &[O_1D, O2], &[O, O2], tg(3.2e-17, 0.0, -67.0)),
    r(218, &[O_1D, O2], &[O, O2_A], k(1.0e-18)),
    r(219, &[O_1D, H2O], &[OH, OH], k(2.2e-16)),
    r(220, &[O_1D, H2O], &[O, H2O], k(1.2e-17)),
    r(221, &[O_1D, H2], &[OH, H], k(1.1e-16)),
    r(222, &[O_1D, N2O], &[NO, NO], k(7.2e-17)),
    r(223, &[O_1D, N2O], &[N2, O2], k(4.4e-17)),
    r(224, &[O_1D, O3], &[O2, O2], k(1.2e-16)),
    r(225, &[O_1D, O3], &[O2, O, O], k(1.2e-16)),
    r(226, &[O_1D, NO], &[O, NO], k(4.0e-17)),
    r(227, &[O2_A, O2], &[O2, O2], tg(2.2e-24, 0.8, 0.0)),
    r(228, &[O2_A, N2], &[O2, N2], k(3.0e-27)),
    r(229, &[O2_A, O3], &[O2, O2, O], tg(5.2e-17, 0.0, 2840.0)),
    r(230, &[O2_A, O], &[O2, O], k(7.0e-22)),
    r(231, &[O2_A, NO], &[O2, NO], k(2.5e-23)),
    r(232, &[O2_A, H2O], &[O2, H2O], k(4.0e-24)),
    // neutral nitrogen and oxygen chemistry
    r(233, &[N, O, M], &[NO, M], tg(1.0e-44, -0.5, 0.0)),
    r(234, &[N, N, M], &[N2, M], tg(8.3e-46, 0.0, -500.0)),
    r(235, &[O, O, M], &[O2, M], tg(3.2e-47, -1.0, -900.0)),
    r(236, &[O, O2, M], &[O3, M], tg(6.9e-46, -1.25, 0.0)),
    r(237, &[N, O2], &[NO, O], tg(4.4e-18, 1.0, 3220.0)),
    r(238, &[N, NO], &[N2, O], tg(2.1e-17, 0.0, -100.0)),
    r(239, &[N, NO2], &[N2O, O], k(3.0e-18)),
    r(240, &[N, NO2], &[NO, NO], k(2.3e-18)),
    r(241, &[N, O3], &[NO, O2], k(2.0e-22)),
    r(242, &[O, NO, M], &[NO2, M], tg(1.0e-43, -1.6, 0.0)),
    r(243, &[O, NO2], &[NO, O2], tg(5.1e-18, 0.0, -198.0)),
    r(244, &[O, NO2, M], &[NO3, M], tg(9.0e-44, -2.0, 0.0)),
    r(245, &[O, O3], &[O2, O2], tg(8.0e-18, 0.0, 2060.0)),
    r(246, &[O, NO3], &[O2, NO2], k(1.7e-17)),
    r(247, &[O3, NO], &[NO2, O2], tg(3.0e-18, 0.0, 1500.0)),
    r(248, &[O3, NO2], &[NO3, O2], tg(1.2e-19, 0.0, 2450.0)),
    r(249, &[NO, NO3], &[NO2, NO2], tg(1.5e-17, 0.0, -170.0)),
    r(250, &[NO2, NO3, M], &[N2O5, M], tg(2.8e-42, -3.5, 0.0)),
    r(251, &[N2O5, M], &[NO2, NO3, M], tg(1.0e-9, -3.5, 11000.0)),
    r(252, &[NO, NO2, M], &[N2O3, M], tg(3.1e-46, -7.7, 0.0)),
    r(253, &[N2O3, M], &[NO, NO2, M], tg(1.9e-13, -8.7, 4880.0)),
    r(254, &[NO2, NO2, M], &[N2O4, M], tg(1.4e-45, -3.8, 0.0)),
    r(255, &[N2O4, M], &[NO2, NO2, M], tg(1.3e-11, -3.8, 6400.0)),
    r(256, &[NO, NO, O2], &[NO2, NO2], tg(3.3e-51, 0.0, -530.0)),
    r(257, &[NO3, NO3], &[NO2, NO2, O2], tg(8.5e-19, 0.0, 2450.0)),
    r(258, &[NO2, NO3], &[NO, NO2, O2], tg(4.5e-20, 0.0, 1260.0)),
    // hydrogen chemistry
    r(259, &[H, O2, M], &[HO2, M], tg(5.4e-44, -1.8, 0.0)),
    r(260, &[H, O3], &[OH, O2], tg(1.4e-16, 0.0, 470.0)),
    r(261, &[H, HO2], &[OH, OH], k(7.2e-17)),
    r(262, &[H, HO2], &[H2, O2], k(6.9e-18)),
    r(263, &[H, HO2], &[H2O, O], k(1.6e-18)),
    r(264, &[H, NO2], &[OH, NO], tg(4.0e-16, 0.0, 340.0)),
    r(265, &[H, NO, M], &[HNO, M], tg(1.0e-44, -1.3, 0.0)),
    r(266, &[H, OH, M], &[H2O, M], tg(6.9e-43, -2.0, 0.0)),
    r(267, &[H, H, M], &[H2, M], tg(6.0e-45, -1.0, 0.0)),
    r(268, &[H, HNO], &[H2, NO], tg(3.0e-17, 0.0, 500.0)),
    r(269, &[O, OH], &[O2, H], tg(2.4e-17, 0.0, -110.0)),
    r(270, &[O, HO2], &[OH, O2], tg(2.7e-17, 0.0, -224.0)),
    r(271, &[O, H2O2], &[OH, HO2], tg(1.4e-18, 0.0, 2000.0)),
    r(272, &[O, HNO], &[OH, NO], k(3.8e-17)),
    r(273, &[O, H2], &[OH, H], tg(1.6e-17, 0.0, 4570.0)),
    r(274, &[OH, OH], &[H2O, O], k(1.8e-18)),
    r(275, &[OH, OH, M], &[H2O2, M], tg(6.9e-43, -0.8, 0.0)),
    r(276, &[OH, HO2], &[H2O, O2], tg(4.8e-17, 0.0, -250.0)),
    r(277, &[OH, H2], &[H2O, H], tg(2.8e-18, 0.0, 1800.0)),
    r(278, &[OH, O3], &[HO2, O2], tg(1.7e-18, 0.0, 940.0)),
    r(279, &[OH, H2O2], &[H2O, HO2], tg(2.9e-18, 0.0, 160.0)),
    r(280, &[OH, NO, M], &[HNO2, M], tg(7.4e-43, -2.4, 0.0)),
    r(281, &[OH, NO2, M], &[HNO3, M], tg(2.2e-42, -2.9, 0.0)),
    r(282, &[OH, HNO2], &[H2O, NO2], tg(1.8e-17, 0.0, 390.0)),
    r(283, &[OH, HNO3], &[H2O, NO3], tg(2.4e-20, 0.0, -460.0)),
    r(284, &[OH, HNO], &[H2O, NO], k(8.0e-17)),
    r(285, &[OH, NO3], &[HO2, NO2], k(2.0e-17)),
    r(286, &[HO2, HO2], &[H2O2, O2], tg(3.0e-19, 0.0, -460.0)),
    r(287, &[HO2, NO], &[OH, NO2], tg(3.5e-18, 0.0, -250.0)),
    r(288, &[HO2, O3], &[OH, O2, O2], tg(1.0e-20, 0.0, 490.0)),
    r(289, &[HO2, NO3], &[OH, NO2, O2], k(3.5e-18)),
    r(290, &[N, OH], &[NO, H], tg(3.8e-17, 0.0, -85.0)),
    r(291, &[N, HO2], &[NO, OH], k(2.2e-17)),
    r(292, &[NO3, HO2], &[HNO3, O2], k(9.2e-19)),
    r(293, &[N2O5, H2O], &[HNO3, HNO3], k(2.0e-27)),
    r(294, &[HNO2, HNO2], &[NO, NO2, H2O], k(1.0e-26)),
    r(295, &[N2_A, H2], &[N2, H, H], k(2.0e-21)),
    // electron impact on N2 (BOLSIG+)
    r(625, &[E, N2], &[E, N2], bolsig(625)),
    r(626, &[E, N2], &[E, N2], bolsig(626)),
    r(627, &[E, N2], &[E, N2], bolsig(627)),
    r(628, &[E, N2], &[E, N2], bolsig(628)),
    r(629, &[E, N2], &[E, N2], bolsig(629)),
    r(630, &[E, N2], &[E, N2], bolsig(630)),
    r(631, &[E, N2], &[E, N2], bolsig(631)),
    r(632, &[E, N2], &[E, N2], bolsig(632)),
    r(633, &[E, N2], &[E, N2], bolsig(633)),
    r(634, &[E, N2], &[E, N2_A], bolsig(634)),
    r(635, &[E, N2], &[E, N2_A], bolsig(635)),
    r(636, &[E, N2], &[E, N2_B], bolsig(636)),
    r(637, &[E, N2], &[E, N2_B], bolsig(637)),
    r(638, &[E, N2], &[E, N2], bolsig(638)),
    r(639, &[E, N2], &[E, N, N_2D], bolsig(639)),
    r(640, &[E, N2], &[E, N, N], bolsig(640)),
    r(641, &[E, N2], &[E, E, N2_ION], bolsig(641)),
    r(642, &[E, N2], &[E, E, N, N_ION], bolsig(642)),
    // electron impact on O2
    r(643, &[E, O2], &[E, O2], bolsig(643)),
    r(644, &[E, O2], &[E, O2], bolsig(644)),
    r(645, &[E, O2], &[E, O2], bolsig(645)),
    r(646, &[E, O2], &[E, O2], bolsig(646)),
    r(647, &[E, O2], &[E, O2], bolsig(647)),
    r(648, &[E, O2], &[O_NEG, O], bolsig(648)),
    r(649, &[E, O2], &[E, O2_A], bolsig(649)),
    r(650, &[E, O2], &[E, O2], bolsig(650)),
    r(651, &[E, O2], &[E, O, O], bolsig(651)),
    r(652, &[E, O2], &[E, O, O_1D], bolsig(652)),
    r(653, &[E, O2], &[E, E, O2_ION], bolsig(653)),
    r(654, &[E, O2], &[E, E, O, O_ION], bolsig(654)),
    // electron impact on H2O
    r(655, &[E, H2O], &[E, H2O], bolsig(655)),
    r(656, &[E, H2O], &[E, H2O], bolsig(656)),
    r(657, &[E, H2O], &[E, H2O], bolsig(657)),
    r(658, &[E, H2O], &[E, H2O], bolsig(658)),
    r(659, &[E, H2O], &[H_NEG, OH], bolsig(659)),
    r(660, &[E, H2O], &[OH_NEG, H], bolsig(660)),
    r(661, &[E, H2O], &[E, OH, H], bolsig(661)),
    r(662, &[E, H2O], &[E, O_1D, H2], bolsig(662)),
    r(663, &[E, H2O], &[E, E, H2O_ION], bolsig(663)),
    r(664, &[E, H2O], &[E, E, OH_ION, H], bolsig(664)),
    r(665, &[E, H2O], &[E, E, H_ION, OH], bolsig(665)),
    // electron impact on radicals
    r(666, &[E, O], &[E, O_1D], bolsig(666)),
    r(667, &[E, O], &[E, E, O_ION], bolsig(667)),
    r(668, &[E, N], &[E, E, N_ION], bolsig(668)),
    r(669, &[E, O3], &[O_NEG, O2], bolsig(669)),
    r(670, &[E, O3], &[E, O, O2], bolsig(670)),
    r(671, &[E, NO], &[E, E, NO_ION], bolsig(671)),
    r(672, &[E, NO], &[E, N, O], bolsig(672)),
    r(673, &[E, H2], &[E, H, H], bolsig(673)),
];

impl Mechanism {
    /// built-in humid air mechanism over the registry of [`SpeciesRegistry::air`]
    pub fn air() -> Result<Self, KineticsError> {
        Mechanism::custom(AIR_REACTIONS.to_vec(), NO_SPECIES + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kinetics::molmass::parse_species;
    use std::collections::HashSet;

    fn atom_and_charge_balance(list: &[usize]) -> (usize, usize, usize, i32) {
        list.iter().fold((0, 0, 0, 0), |acc, &s| {
            let c = parse_species(SPECIES_FORMULAS[s]);
            (
                acc.0 + c.count("N"),
                acc.1 + c.count("O"),
                acc.2 + c.count("H"),
                acc.3 + c.charge,
            )
        })
    }

    #[test]
    fn test_every_reaction_conserves_atoms_and_charge() {
        for reaction in AIR_REACTIONS {
            let lhs = atom_and_charge_balance(reaction.reactants.as_slice());
            let rhs = atom_and_charge_balance(reaction.products.as_slice());
            assert_eq!(lhs, rhs, "R{} is not balanced", reaction.number);
        }
    }

    #[test]
    fn test_reaction_numbers_are_unique() {
        let numbers: HashSet<u32> = AIR_REACTIONS.iter().map(|r| r.number).collect();
        assert_eq!(numbers.len(), AIR_REACTIONS.len());
    }

    #[test]
    fn test_table_channels() {
        let mechanism = Mechanism::air().unwrap();
        let (first, last) = TABLE_REACTIONS;
        assert_eq!(mechanism.table_reactions(), (last - first + 1) as usize);
        for reaction in mechanism.reactions() {
            match reaction.law {
                RateLaw::Table { number } => {
                    assert_eq!(number, reaction.number);
                    assert!((first..=last).contains(&number));
                    assert_eq!(reaction.reactants.get(0), E);
                }
                RateLaw::Analytic(_) => assert!(reaction.number < first),
            }
        }
    }

    #[test]
    fn test_no_reaction_runs_on_background_alone() {
        let background = [M, N2, O2, H2O];
        for reaction in AIR_REACTIONS {
            assert!(
                reaction
                    .reactants
                    .as_slice()
                    .iter()
                    .any(|s| !background.contains(s)),
                "R{} consumes only background gases",
                reaction.number
            );
        }
    }

    #[test]
    fn test_energy_loss_channels_have_no_balance_terms() {
        let mechanism = Mechanism::air().unwrap();
        let j = mechanism.find_by_number(625).unwrap();
        for s in 0..mechanism.n_species() {
            let eq = mechanism.balance(s);
            assert!(eq.sources.iter().all(|t| t.reaction != j));
            assert!(eq.losses.iter().all(|t| t.reaction != j));
        }
        // e + e + N2+ -> N2 + e consumes one electron net
        let j = mechanism.find_by_number(19).unwrap();
        let loss = mechanism
            .balance(E)
            .losses
            .iter()
            .find(|t| t.reaction == j)
            .unwrap();
        assert_eq!(loss.multiplier, 1.0);
    }
}
