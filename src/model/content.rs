// Static topic tables. Everything here is inert data; the popup framework
// never mutates it.

use super::section::{Category, SectionRecord, Topic, TopicId};

type Row = (&'static str, &'static str, Option<&'static str>);

pub const LITHO_TECHNIQUES: [&str; 5] = [
    "Optical Lithography",
    "Electron-beam Lithography",
    "Nanoimprint Lithography",
    "X-ray Lithography",
    "UV Lithography",
];

pub const CHAR_TECHNIQUES: [&str; 5] = [
    "Scanning Electron Microscopy",
    "Atomic Force Microscopy",
    "X-ray Diffraction",
    "Raman Spectroscopy",
    "Ellipsometry",
];

pub const LITHOGRAPHY_DESCRIPTION: &str = "Lithography is a microfabrication process used to \
pattern thin films and substrates. It involves using light to transfer a geometric pattern \
from a photomask to a light-sensitive chemical photoresist. Common types include optical \
lithography, electron-beam lithography, and nanoimprint lithography.";

pub const CHARACTERIZATION_DESCRIPTION: &str = "Characterization refers to the analysis of \
material properties and structures. It includes techniques to examine physical, chemical, \
and structural characteristics at various scales. Common methods include microscopy, \
spectroscopy, diffraction, and surface analysis.";

const LITHO_PROCESS_STEPS: &[Row] = &[
    (
        "1. Substrate Preparation",
        "The lithography process begins with meticulous wafer cleaning. Using the \
industry-standard RCA method, wafers undergo a two-stage purification: organic contaminants \
are removed with an ammonia-peroxide solution (SC-1), then metallic ions with a hydrochloric \
acid mixture (SC-2). Megasonic cleaning removes nanoparticles, and spin-rinse-drying leaves \
an atomically smooth surface.\n\n\
Why it matters: even nanometer-scale impurities can disrupt circuit patterns. This cleaning \
ensures perfect photoresist adhesion and pattern fidelity in later steps.\n\n\
Cleaning sequence:\n\
- SC-1: 5:1:1 H2O:H2O2:NH4OH at 75C for 10 min\n\
- Megasonic DI rinse: 1 MHz, 20C for 3 min\n\
- SC-2: 6:1:1 H2O:H2O2:HCl at 75C for 10 min\n\
- Final rinse: overflow DI water (18.2 MOhm-cm) for 5 min\n\
- Spin-rinse-dry: 2000 rpm for 60 s with N2 purge",
        Some("step1_substrate.png"),
    ),
    (
        "2. HMDS Priming",
        "Before photoresist application, wafers receive an HMDS primer that transforms the \
surface chemistry. In a vacuum chamber, HMDS vapor reacts with surface hydroxyl groups to \
create a hydrophobic monolayer: Si-OH + HMDS -> Si-O-Si(CH3)3 + NH3. The wafer goes from \
water-attracting to water-repelling, much like waxing a car.\n\n\
This invisible layer, one to two molecules thick, prevents resist beading and ensures a \
uniform coating.\n\n\
Vapor prime sequence:\n\
1. Dehydration bake: 150C for 60 s (hotplate)\n\
2. Vacuum pump down: 30 s to 50 Torr\n\
3. HMDS vapor dose: 5 ml liquid HMDS vaporized at 23C\n\
4. Reaction time: 45 s at 50 Torr\n\
5. Vent to N2 atmosphere: 20 s ramp to 760 Torr",
        Some("step2_hmds.png"),
    ),
    (
        "3. Photoresist Coating",
        "A light-sensitive polymer solution is spin-coated onto the wafer, forming an \
ultra-thin, uniform film. Spinning has two phases: low-speed spread (500-1000 rpm) followed \
by high-speed thinning (1000-5000 rpm). Centrifugal force distributes the resist outward \
while solvent evaporation leaves a solid film; thickness follows t = k*w^a, so faster spins \
give thinner films.\n\n\
Processing occurs under yellow light to prevent premature exposure, and resist is filtered \
to 0.1 um to remove particles.\n\n\
Spin coating for i-line resist (AZ 5214E, positive tone):\n\
- Dispense: 3 ml resist at 500 rpm (static dispense)\n\
- Spread: 1000 rpm for 3 s\n\
- Spin: 4000 rpm for 30 s (final thickness 1.4 um)\n\
- Edge bead removal: 1 mm edge, solvent spray",
        Some("step3_coating.gif"),
    ),
    (
        "4. Soft Bake",
        "A gentle bake removes residual solvents and stabilizes the resist film. Polymer \
chains rearrange and condense, raising the glass transition temperature; 10-30% of the film \
thickness is lost as solvents evaporate.\n\n\
The temperature must be high enough to remove solvents but low enough to preserve the \
photosensitive compounds; the sweet spot is typically 90-110C.\n\n\
Thermal profile (in-line hotplate with proximity gap):\n\
1. Ramp-up: 23C to 100C in 30 s\n\
2. Soak: 100C for 60 s\n\
3. Ramp-down: 100C to 23C in 45 s\n\
Process window: 98-102C optimal; below 95C solvent removal is incomplete, above 105C the \
resist degrades",
        Some("step4_softbake.png"),
    ),
    (
        "5. Exposure",
        "Pattern transfer happens here. Ultraviolet light projects the circuit design through \
a photomask onto the resist, with multiple wafer layers aligned within nanometers.\n\n\
Different wavelengths (g-line 436 nm down to EUV 13.5 nm) enable different feature sizes; \
the aerial image quality depends on numerical aperture and coherence factor. Optical \
Proximity Correction adds tiny adjustments to the mask pattern so it prints correctly on \
the wafer despite diffraction.",
        Some("step5_exposure.png"),
    ),
    (
        "6. Post-Exposure Bake",
        "For chemically amplified resists, this bake triggers the reactions that develop the \
latent image. Heat causes acid molecules to diffuse and catalyze polymer deprotection, with \
diffusion length controlled to 10-50 nm and temperature uniformity within 0.1C across the \
wafer.\n\n\
The delay between exposure and baking must stay under 60 s to keep atmospheric contaminants \
from neutralizing the active acid compounds.\n\n\
Thermal profile (track-mounted multi-zone hotplate):\n\
- Ramp-up: 23C to 110C in 15 s\n\
- Soak: 110C for 60 s\n\
- Ramp-down: 110C to 23C in 20 s",
        Some("step6_peb.png"),
    ),
    (
        "7. Development",
        "The developer solution washes away exposed resist areas (for positive tone), \
revealing the 3D circuit pattern. Standard developers use tetramethylammonium hydroxide \
(TMAH) in precise concentrations.\n\n\
Development rate is highly sensitive to temperature (0.5C control needed), and megasonic \
agitation helps develop small features without pattern collapse. Like photographic \
development, this transforms the invisible latent image into visible structures, creating \
the stencil for subsequent etching.",
        Some("step7_develop.gif"),
    ),
    (
        "8. Hard Bake",
        "A final bake strengthens the remaining resist pattern before etching by crosslinking \
polymer chains, improving etch resistance by 20-50%. Baking causes slight resist flow \
(5-20 nm critical dimension change) that must be accounted for in mask design; some advanced \
processes use UV curing instead to minimize dimensional changes.\n\n\
Thermal profile (convection oven with N2 purge):\n\
- Ramp-up: 23C to 125C in 5 min\n\
- Soak: 125C for 30 min\n\
- Ramp-down: 125C to 23C in 10 min",
        Some("step8_hardbake.png"),
    ),
    (
        "9. Etching",
        "The resist pattern now guides the etching of underlying layers. Plasma etching uses \
energized ions (such as CF4+ or Cl+) to physically and chemically remove exposed material. \
Etching must be anisotropic (vertical sidewalls), selective to the resist mask, and uniform \
across the wafer; modern systems detect endpoint with real-time optical emission \
spectroscopy.\n\n\
Like sandblasting through a stencil, this permanently transfers the temporary resist \
pattern into the device layers.\n\n\
Etch chemistry:\n\
- Silicon: HBr/Cl2/O2 (40/20/5 sccm)\n\
- Oxide: C4F8/Ar/O2 (30/50/5 sccm)\n\
- Metal: Cl2/BCl3 (30/10 sccm)\n\
Selectivity: resist:Si = 1:3, resist:SiO2 = 1:4, resist:Al = 1:5",
        Some("step9_etch.gif"),
    ),
    (
        "10. Strip & Clean",
        "Finally, all remaining resist is removed, by wet chemical stripping, oxygen plasma \
ashing, or both. Post-strip cleaning removes any residues that could interfere with later \
processing; the water break test confirms cleanliness.\n\n\
The wafer now bears the circuit patterns and is ready for the next manufacturing steps.\n\n\
Removal sequence:\n\
1. Plasma ash: O2 (500 sccm) at 250C, 300 W for 2 min\n\
2. Wet clean: EKC265 at 85C for 10 min\n\
Final clean: SC-1 for 5 min at 70C, megasonic 1 MHz for 3 min, Marangoni dry with IPA \
vapor and N2 knife",
        Some("step10_strip.png"),
    ),
];

const CHAR_PROCESS_STEPS: &[Row] = &[
    (
        "1. I-V Characterization Fundamentals",
        "Current-voltage (I-V) measurements reveal the charge transport mechanisms governing \
device operation.\n\n\
1. Thermionic emission (forward bias): carriers gain enough thermal energy to overcome the \
potential barrier, giving the exponential current increase of the ideal diode equation. \
Non-idealities show up as depletion-region recombination (n near 2), series resistance \
roll-off at high current, and tunneling at high doping.\n\n\
2. Space-charge limited current: dominates in low-mobility materials, with three regimes - \
ohmic (J ~ V), trap-filled limit, then Child's law (J ~ V^2).\n\n\
3. Reverse bias: generation current in the depletion region, trap-assisted tunneling \
(Poole-Frenkel effect), and avalanche breakdown at high fields.\n\n\
Measurement considerations: sweep direction affects trap charging, temperature dependence \
reveals activation energies, and illumination separates photoconduction effects.",
        Some("iv_theory.png"),
    ),
    (
        "2. C-V Characterization Physics",
        "Capacitance-voltage (C-V) measurements probe charge distribution dynamics.\n\n\
1. Depletion capacitance: the space-charge region acts as a dielectric whose width varies \
with applied bias (C ~ 1/sqrt(V)); the doping profile is extracted from the slope of C^-2 \
versus V.\n\n\
2. Interface state response: traps follow the AC signal at low frequencies and freeze out \
at high frequencies (1 MHz); the conductance method measures trap time constants.\n\n\
3. Deep level transients: capacitance transients after voltage steps, with emission rate \
depending on temperature as e_n = sigma_n * v_th * N_s * exp(-dE/kT).",
        Some("cv_theory.png"),
    ),
    (
        "3. Parameter Extraction Methodology",
        "I-V analysis:\n\
1. Ideality factor n from the slope of ln(I) versus V: n = (q/kT)(dV/dlnI). n = 1 means \
pure thermionic emission, n = 2 dominant recombination.\n\
2. Series resistance from the high-current deviation from ideal: Rs = dV/dI - nkT/qI, with \
corrected voltage V' = V - I*Rs.\n\n\
C-V analysis:\n\
1. Doping concentration: N = 2 / (q * eps * A^2 * d(1/C^2)/dV), with the depth profile from \
incremental analysis.\n\
2. Flatband voltage: V_fb = phi_ms - Q_it/C_ox, which determines the fixed charge density.",
        Some("analysis_methods.png"),
    ),
    (
        "4. Practical Measurement Considerations",
        "System requirements. I-V: a source-measure unit with current resolution below 1 pA \
and voltage resolution below 1 mV, guarded connections for leakage control, and a \
temperature-controlled stage. C-V: an LCR meter covering 1 mHz to 10 MHz with 1 fF \
capacitance resolution, DC bias superposition, and RF shielding.\n\n\
Error sources. I-V: self-heating at high currents, photocurrent from ambient light, \
non-equilibrium conditions from fast sweeps. C-V: series resistance effects, minority \
carrier response, deep level transient interference.\n\n\
Best practices: 4-wire Kelvin connections and sweep rates below 100 mV/s for I-V; start \
from accumulation, measure at multiple frequencies, and wait for steady state for C-V.",
        Some("measurement_setup.png"),
    ),
];

const OPTICAL_LITHO: Row = (
    "Optical Lithography",
    "The workhorse of semiconductor patterning. Optical lithography uses light to transfer \
geometric patterns from a photomask to a light-sensitive photoresist, and is the dominant \
patterning technology in semiconductor manufacturing.\n\n\
Key components:\n\
- Light source: mercury lamps (g-line 436 nm, i-line 365 nm) or excimer lasers (DUV 248 nm, \
193 nm)\n\
- Photomask: chrome patterns on quartz, 4x or 5x magnification\n\
- Projection optics: high-NA lenses (NA up to 1.35 with immersion)\n\
- Photoresist: chemically amplified resists for advanced nodes\n\n\
Resolution: R = k1 * lambda / NA, with k1 typically 0.25-0.4.\n\n\
Modern advancements include immersion lithography (water between lens and wafer, NA > 1.0), \
multiple patterning (LELE, SADP, SAQP for sub-20 nm features), and computational \
lithography (OPC, ILT, SMO).\n\n\
Typical parameters: alignment accuracy below 3 nm, overlay control below 2 nm, depth of \
focus 100-300 nm, throughput 100-200 wafers/hour.",
    Some("optical_litho.png"),
);

const EBEAM_LITHO: Row = (
    "Electron-beam Lithography",
    "Ultimate resolution patterning. E-beam lithography uses a focused electron beam to \
directly write patterns on resist-coated substrates, achieving features below 10 nm.\n\n\
Advantages: no physical masks (direct write), exceptional resolution (5-10 nm), overlay \
accuracy below 2 nm, and flexible pattern changes.\n\n\
Challenges: very slow throughput (hours per wafer), proximity effects from electron \
scattering, high equipment cost, and resist sensitivity limits.\n\n\
Technical specifications:\n\
- Beam energy: 10-100 keV\n\
- Beam current: 10 pA to 100 nA\n\
- Spot size: 1-5 nm\n\
- Positioning accuracy: below 1 nm\n\
- Resist sensitivity: 10-100 uC/cm2\n\n\
Applications: photomask fabrication, research and development, quantum devices, photonic \
crystals, nanostructures.",
    Some("ebeam_litho.png"),
);

const NANOIMPRINT_LITHO: Row = (
    "Nanoimprint Lithography",
    "High-throughput nanoscale patterning. NIL physically molds resist using a rigid \
template, enabling high-resolution patterning without complex optics.\n\n\
Process variants:\n\
1. Thermal NIL: heat resist above Tg, imprint, then cool\n\
2. UV-NIL: UV-curable resist with a transparent template\n\
3. Roll-to-roll: continuous imprinting for flexible substrates\n\n\
Advantages: sub-10 nm resolution demonstrated, high throughput potential, lower cost than \
optical or EUV, and 3D patterning capability.\n\n\
Specifications: alignment accuracy below 5 nm, throughput above 20 wafers/hour, template \
life over 1000 imprints, residual layer uniformity below 10 nm.\n\n\
Challenges: defect control, template fabrication, release agents, and pattern fidelity. \
Applications include NAND flash, bit-patterned media, photonic devices, and flexible \
electronics.",
    Some("nanoimprint.png"),
);

const XRAY_LITHO: Row = (
    "X-ray Lithography",
    "High-energy pattern transfer. Uses synchrotron radiation (0.5-4 nm wavelength, \
typically 1 nm) to pattern thick resists through proximity printing.\n\n\
Key features: deep penetration through resist, minimal diffraction, high aspect ratio \
patterns (over 50:1 demonstrated), and parallel exposure of the entire wafer.\n\n\
Specifications: mask-to-wafer gap 10-50 um, resist thickness up to 1 mm, exposure dose \
100-1000 mJ/cm2.\n\n\
Advantages: no optical distortions, high depth of focus, suitable for 3D structures. \
Challenges: mask fabrication difficulty, synchrotron access, and alignment.\n\n\
Applications: MEMS devices, the LIGA process, high-aspect-ratio structures, X-ray optics, \
biomedical devices.",
    Some("xray_litho.gif"),
);

const UV_LITHO: Row = (
    "UV Lithography",
    "Versatile mid-range patterning. Utilizes ultraviolet light (300-400 nm) for resist \
exposure, balancing resolution and throughput with mercury lamp sources (g-line 436 nm, \
i-line 365 nm) in contact/proximity or projection modes.\n\n\
Specifications:\n\
- Resolution: 0.5-1.0 um (projection)\n\
- Depth of focus: 1-2 um\n\
- Alignment accuracy: 50-100 nm\n\
- Throughput: 50-100 wafers/hour\n\
- Resist thickness: 0.5-2.0 um\n\n\
Process considerations: diffraction effects are significant, contact mode causes mask \
damage, and the proximity gap limits resolution.\n\n\
Advantages: lower cost than DUV/EUV, simple operation, good for non-critical layers. \
Applications: MEMS, microfluidics, PCB manufacturing, displays.",
    Some("uv_litho.gif"),
);

const SEM_ANALYSIS: Row = (
    "Scanning Electron Microscopy",
    "High-resolution surface imaging. SEM scans a focused electron beam (1-30 keV) across \
the sample; secondary electrons emitted from the surface form the image, with backscattered \
electrons providing Z-contrast and EDS providing elemental analysis.\n\n\
Capabilities: 0.5-5 nm resolution, 10x to 1,000,000x magnification, and depth of field \
10-100x better than optical microscopy.\n\n\
Instrument parameters:\n\
- Accelerating voltage: 1-30 kV\n\
- Probe current: 1 pA to 100 nA\n\
- Working distance: 2-10 mm\n\
- Vacuum: 1e-3 to 1e-6 Pa\n\n\
Samples must be conductive or coated, typically under 1 cm, vacuum-compatible, and clean. \
Applications: defect analysis, nanomaterial characterization, failure analysis, metrology.",
    Some("sem_microscope.png"),
);

const AFM_ANALYSIS: Row = (
    "Atomic Force Microscopy",
    "Nanoscale surface profiling. AFM measures topography by scanning a sharp tip across the \
sample while monitoring tip-sample interactions.\n\n\
Operating modes: contact (tip in constant contact), tapping (tip oscillates near the \
surface), and non-contact (van der Waals forces).\n\n\
Specifications: atomic vertical resolution, about 1 nm lateral; scan ranges from 1 um to \
100 um; force sensitivity below 1 nN; operation in air, liquid, or vacuum.\n\n\
Measures topography, roughness (Ra, Rq, Rz), mechanical properties (modulus, adhesion), \
and electrical or magnetic properties.\n\n\
Advantages: atomic-level resolution with no sample coating and quantitative height data. \
Limitations: slow scans, tip convolution, limited field of view.",
    Some("afm_diagram.png"),
);

const XRD_ANALYSIS: Row = (
    "X-ray Diffraction",
    "Crystal structure analysis. XRD measures diffraction patterns from crystalline \
materials to determine atomic structure and phase composition.\n\n\
Techniques: powder XRD for polycrystalline samples, grazing-incidence thin film XRD, \
high-resolution rocking curves, and XRR reflectivity for thin films.\n\n\
Information obtained: crystal structure identification, lattice parameters, crystallite \
size, strain and stress, texture and preferred orientation.\n\n\
Instrument: Cu K-alpha source (1.54 A) typical, angular range 5-140 degrees 2-theta, \
resolution below 0.01 degrees.\n\n\
Analysis: peak position gives d-spacing, width gives crystallite size, intensity gives \
texture, shifts give strain.",
    Some("xrd_equipment.png"),
);

const RAMAN_ANALYSIS: Row = (
    "Raman Spectroscopy",
    "Molecular vibrational fingerprinting. Raman spectroscopy measures inelastic scattering \
of light to probe molecular vibrations and crystal phonons, non-destructively.\n\n\
Specifications: excitation 325-785 nm, spectral resolution below 1 cm-1, spatial \
resolution around 1 um, with depth profiling and mapping.\n\n\
Information obtained: chemical bonds, crystal phases, stress/strain state, defect density, \
layer thickness.\n\n\
Advantages: minimal sample preparation, works through transparent media, no vacuum \
required, complementary to FTIR.\n\n\
Applications: material identification, carbon nanotube characterization, semiconductor \
strain analysis, pharmaceutical analysis.",
    Some("raman_spectrometer.png"),
);

const ELLIPSOMETRY_ANALYSIS: Row = (
    "Ellipsometry",
    "Thin film optical characterization. Ellipsometry measures polarization changes in \
reflected light to determine film thickness (sub-nm to um), refractive index (n and k), \
optical constants, interface quality, and anisotropy.\n\n\
Variants: spectroscopic, imaging, in-situ, and Mueller matrix ellipsometry.\n\n\
Specifications:\n\
- Wavelength range: 190-1700 nm\n\
- Angle range: 45-90 degrees\n\
- Thickness accuracy: below 0.1 nm\n\
- Spot size: 10 um to mm\n\n\
Analysis builds an optical model and fits layer by layer with dispersion relations. \
Applications: semiconductor thin films, optical coatings, organic layers, process \
monitoring.",
    Some("ellipsometer.png"),
);

const LITHO_TECHNIQUE_PAGES: [Row; 5] =
    [OPTICAL_LITHO, EBEAM_LITHO, NANOIMPRINT_LITHO, XRAY_LITHO, UV_LITHO];

const CHAR_TECHNIQUE_PAGES: [Row; 5] = [
    SEM_ANALYSIS,
    AFM_ANALYSIS,
    XRD_ANALYSIS,
    RAMAN_ANALYSIS,
    ELLIPSOMETRY_ANALYSIS,
];

fn rows_to_sections(rows: &[Row]) -> Vec<SectionRecord> {
    rows.iter()
        .map(|(heading, body, image)| SectionRecord::new(heading, body, *image))
        .collect()
}

/// Builds the topic content for a selection. Each call yields a fresh,
/// independent copy; popups never share state.
pub fn topic(id: TopicId) -> Topic {
    match id {
        TopicId::LithoProcess => Topic {
            title: "Comprehensive Lithography Process with Visual References".to_string(),
            category: Category::Lithography,
            sections: rows_to_sections(LITHO_PROCESS_STEPS),
        },
        TopicId::CharProcess => Topic {
            title: "Comprehensive Characterization Techniques".to_string(),
            category: Category::Characterization,
            sections: rows_to_sections(CHAR_PROCESS_STEPS),
        },
        TopicId::LithoTechnique(ix) => {
            let row = LITHO_TECHNIQUE_PAGES[ix % LITHO_TECHNIQUE_PAGES.len()];
            Topic {
                title: row.0.to_string(),
                category: Category::Lithography,
                sections: rows_to_sections(&[row]),
            }
        }
        TopicId::CharTechnique(ix) => {
            let row = CHAR_TECHNIQUE_PAGES[ix % CHAR_TECHNIQUE_PAGES.len()];
            Topic {
                title: row.0.to_string(),
                category: Category::Characterization,
                sections: rows_to_sections(&[row]),
            }
        }
    }
}
