//! Target architecture (`e_machine`) values from the ELF gABI table.
//!
//! Every assigned value up to `EM_LOONGGPU` (267) is named. The ranges the
//! gABI reserves (11-14, 16, 24-35, 121-130, 145-159, 182, 184, 206-209,
//! 225-242) decode as `Unrecognized`.

use crate::macros::elf_enum;

elf_enum! {
    /// Target machine architecture (`e_machine`).
    pub enum Machine: u16 {
        /// `EM_NONE`.
        None = 0 => "No machine",
        /// `EM_M32`.
        M32 = 1 => "AT&T WE 32100",
        /// `EM_SPARC`.
        Sparc = 2 => "SPARC",
        /// `EM_386`.
        X86 = 3 => "Intel 80386",
        /// `EM_68K`.
        M68k = 4 => "Motorola 68000",
        /// `EM_88K`.
        M88k = 5 => "Motorola 88000",
        /// `EM_IAMCU`.
        IntelMcu = 6 => "Intel MCU",
        /// `EM_860`.
        I860 = 7 => "Intel 80860",
        /// `EM_MIPS`.
        Mips = 8 => "MIPS I",
        /// `EM_S370`.
        S370 = 9 => "IBM System/370",
        /// `EM_MIPS_RS3_LE`.
        MipsRs3Le = 10 => "MIPS RS3000 little-endian",
        /// `EM_PARISC`.
        Parisc = 15 => "HP PA-RISC",
        /// `EM_VPP500`.
        Vpp500 = 17 => "Fujitsu VPP500",
        /// `EM_SPARC32PLUS`.
        Sparc32Plus = 18 => "SPARC v8plus",
        /// `EM_960`.
        I960 = 19 => "Intel 80960",
        /// `EM_PPC`.
        PowerPc = 20 => "PowerPC",
        /// `EM_PPC64`.
        PowerPc64 = 21 => "PowerPC 64-bit",
        /// `EM_S390`.
        S390 = 22 => "IBM S/390",
        /// `EM_SPU`.
        Spu = 23 => "IBM SPU/SPC",
        /// `EM_V800`.
        V800 = 36 => "NEC V800",
        /// `EM_FR20`.
        Fr20 = 37 => "Fujitsu FR20",
        /// `EM_RH32`.
        Rh32 = 38 => "TRW RH-32",
        /// `EM_RCE`.
        Rce = 39 => "Motorola RCE",
        /// `EM_ARM`.
        Arm = 40 => "ARM",
        /// `EM_ALPHA`.
        Alpha = 41 => "Digital Alpha",
        /// `EM_SH`.
        SuperH = 42 => "Hitachi SH",
        /// `EM_SPARCV9`.
        SparcV9 = 43 => "SPARC v9 64-bit",
        /// `EM_TRICORE`.
        TriCore = 44 => "Siemens TriCore",
        /// `EM_ARC`.
        Arc = 45 => "Argonaut RISC Core",
        /// `EM_H8_300`.
        H8_300 = 46 => "Hitachi H8/300",
        /// `EM_H8_300H`.
        H8_300h = 47 => "Hitachi H8/300H",
        /// `EM_H8S`.
        H8s = 48 => "Hitachi H8S",
        /// `EM_H8_500`.
        H8_500 = 49 => "Hitachi H8/500",
        /// `EM_IA_64`.
        Ia64 = 50 => "Intel IA-64",
        /// `EM_MIPS_X`.
        MipsX = 51 => "Stanford MIPS-X",
        /// `EM_COLDFIRE`.
        ColdFire = 52 => "Motorola ColdFire",
        /// `EM_68HC12`.
        M68hc12 = 53 => "Motorola M68HC12",
        /// `EM_MMA`.
        Mma = 54 => "Fujitsu MMA Multimedia Accelerator",
        /// `EM_PCP`.
        Pcp = 55 => "Siemens PCP",
        /// `EM_NCPU`.
        Ncpu = 56 => "Sony nCPU embedded RISC",
        /// `EM_NDR1`.
        Ndr1 = 57 => "Denso NDR1",
        /// `EM_STARCORE`.
        StarCore = 58 => "Motorola Star*Core",
        /// `EM_ME16`.
        Me16 = 59 => "Toyota ME16",
        /// `EM_ST100`.
        St100 = 60 => "STMicroelectronics ST100",
        /// `EM_TINYJ`.
        TinyJ = 61 => "Advanced Logic Corp. TinyJ",
        /// `EM_X86_64`.
        X86_64 = 62 => "AMD x86-64",
        /// `EM_PDSP`.
        Pdsp = 63 => "Sony DSP Processor",
        /// `EM_PDP10`.
        Pdp10 = 64 => "Digital PDP-10",
        /// `EM_PDP11`.
        Pdp11 = 65 => "Digital PDP-11",
        /// `EM_FX66`.
        Fx66 = 66 => "Siemens FX66",
        /// `EM_ST9PLUS`.
        St9Plus = 67 => "STMicroelectronics ST9+",
        /// `EM_ST7`.
        St7 = 68 => "STMicroelectronics ST7",
        /// `EM_68HC16`.
        M68hc16 = 69 => "Motorola MC68HC16",
        /// `EM_68HC11`.
        M68hc11 = 70 => "Motorola MC68HC11",
        /// `EM_68HC08`.
        M68hc08 = 71 => "Motorola MC68HC08",
        /// `EM_68HC05`.
        M68hc05 = 72 => "Motorola MC68HC05",
        /// `EM_SVX`.
        Svx = 73 => "Silicon Graphics SVx",
        /// `EM_ST19`.
        St19 = 74 => "STMicroelectronics ST19",
        /// `EM_VAX`.
        Vax = 75 => "Digital VAX",
        /// `EM_CRIS`.
        Cris = 76 => "Axis Communications 32-bit",
        /// `EM_JAVELIN`.
        Javelin = 77 => "Infineon Technologies 32-bit",
        /// `EM_FIREPATH`.
        FirePath = 78 => "Element 14 64-bit DSP",
        /// `EM_ZSP`.
        Zsp = 79 => "LSI Logic 16-bit DSP",
        /// `EM_MMIX`.
        Mmix = 80 => "Donald Knuth's educational 64-bit",
        /// `EM_HUANY`.
        Huany = 81 => "Harvard University machine-independent object",
        /// `EM_PRISM`.
        Prism = 82 => "SiTera Prism",
        /// `EM_AVR`.
        Avr = 83 => "Atmel AVR 8-bit",
        /// `EM_FR30`.
        Fr30 = 84 => "Fujitsu FR30",
        /// `EM_D10V`.
        D10v = 85 => "Mitsubishi D10V",
        /// `EM_D30V`.
        D30v = 86 => "Mitsubishi D30V",
        /// `EM_V850`.
        V850 = 87 => "NEC v850",
        /// `EM_M32R`.
        M32r = 88 => "Mitsubishi M32R",
        /// `EM_MN10300`.
        Mn10300 = 89 => "Matsushita MN10300",
        /// `EM_MN10200`.
        Mn10200 = 90 => "Matsushita MN10200",
        /// `EM_PJ`.
        PicoJava = 91 => "picoJava",
        /// `EM_OPENRISC`.
        OpenRisc = 92 => "OpenRISC 32-bit",
        /// `EM_ARC_COMPACT`.
        ArcCompact = 93 => "ARC International ARCompact",
        /// `EM_XTENSA`.
        Xtensa = 94 => "Tensilica Xtensa",
        /// `EM_VIDEOCORE`.
        VideoCore = 95 => "Alphamosaic VideoCore",
        /// `EM_TMM_GPP`.
        TmmGpp = 96 => "Thompson Multimedia General Purpose Processor",
        /// `EM_NS32K`.
        Ns32k = 97 => "National Semiconductor 32000",
        /// `EM_TPC`.
        Tpc = 98 => "Tenor Network TPC",
        /// `EM_SNP1K`.
        Snp1k = 99 => "Trebia SNP 1000",
        /// `EM_ST200`.
        St200 = 100 => "STMicroelectronics ST200",
        /// `EM_IP2K`.
        Ip2k = 101 => "Ubicom IP2xxx",
        /// `EM_MAX`.
        Max = 102 => "MAX processor",
        /// `EM_CR`.
        Cr = 103 => "National Semiconductor CompactRISC",
        /// `EM_F2MC16`.
        F2mc16 = 104 => "Fujitsu F2MC16",
        /// `EM_MSP430`.
        Msp430 = 105 => "TI MSP430",
        /// `EM_BLACKFIN`.
        Blackfin = 106 => "Analog Devices Blackfin",
        /// `EM_SE_C33`.
        SeC33 = 107 => "Seiko Epson S1C33",
        /// `EM_SEP`.
        Sep = 108 => "Sharp embedded microprocessor",
        /// `EM_ARCA`.
        Arca = 109 => "Arca RISC",
        /// `EM_UNICORE`.
        UniCore = 110 => "PKU-Unity UniCore",
        /// `EM_EXCESS`.
        Excess = 111 => "eXcess configurable CPU",
        /// `EM_DXP`.
        Dxp = 112 => "Icera Deep Execution Processor",
        /// `EM_ALTERA_NIOS2`.
        Nios2 = 113 => "Altera Nios II",
        /// `EM_CRX`.
        Crx = 114 => "National Semiconductor CompactRISC CRX",
        /// `EM_XGATE`.
        XGate = 115 => "Motorola XGATE",
        /// `EM_C166`.
        C166 = 116 => "Infineon C16x/XC16x",
        /// `EM_M16C`.
        M16c = 117 => "Renesas M16C",
        /// `EM_DSPIC30F`.
        DsPic30f = 118 => "Microchip dsPIC30F",
        /// `EM_CE`.
        Ce = 119 => "Freescale Communication Engine RISC",
        /// `EM_M32C`.
        M32c = 120 => "Renesas M32C",
        /// `EM_TSK3000`.
        Tsk3000 = 131 => "Altium TSK3000",
        /// `EM_RS08`.
        Rs08 = 132 => "Freescale RS08",
        /// `EM_SHARC`.
        Sharc = 133 => "Analog Devices SHARC",
        /// `EM_ECOG2`.
        ECog2 = 134 => "Cyan Technology eCOG2",
        /// `EM_SCORE7`.
        Score7 = 135 => "Sunplus S+core7 RISC",
        /// `EM_DSP24`.
        Dsp24 = 136 => "New Japan Radio 24-bit DSP",
        /// `EM_VIDEOCORE3`.
        VideoCore3 = 137 => "Broadcom VideoCore III",
        /// `EM_LATTICEMICO32`.
        LatticeMico32 = 138 => "Lattice Mico32",
        /// `EM_SE_C17`.
        SeC17 = 139 => "Seiko Epson C17",
        /// `EM_TI_C6000`.
        TiC6000 = 140 => "TI TMS320C6000",
        /// `EM_TI_C2000`.
        TiC2000 = 141 => "TI TMS320C2000",
        /// `EM_TI_C5500`.
        TiC5500 = 142 => "TI TMS320C55x",
        /// `EM_TI_ARP32`.
        TiArp32 = 143 => "TI Application Specific RISC",
        /// `EM_TI_PRU`.
        TiPru = 144 => "TI Programmable Realtime Unit",
        /// `EM_MMDSP_PLUS`.
        MmdspPlus = 160 => "STMicroelectronics 64-bit VLIW DSP",
        /// `EM_CYPRESS_M8C`.
        CypressM8c = 161 => "Cypress M8C",
        /// `EM_R32C`.
        R32c = 162 => "Renesas R32C",
        /// `EM_TRIMEDIA`.
        TriMedia = 163 => "NXP TriMedia",
        /// `EM_QDSP6`.
        Hexagon = 164 => "Qualcomm Hexagon",
        /// `EM_8051`.
        I8051 = 165 => "Intel 8051",
        /// `EM_STXP7X`.
        Stxp7x = 166 => "STMicroelectronics STxP7x",
        /// `EM_NDS32`.
        Nds32 = 167 => "Andes NDS32",
        /// `EM_ECOG1X`.
        ECog1x = 168 => "Cyan Technology eCOG1X",
        /// `EM_MAXQ30`.
        Maxq30 = 169 => "Dallas Semiconductor MAXQ30",
        /// `EM_XIMO16`.
        Ximo16 = 170 => "New Japan Radio 16-bit DSP",
        /// `EM_MANIK`.
        Manik = 171 => "M2000 Reconfigurable RISC",
        /// `EM_CRAYNV2`.
        CrayNv2 = 172 => "Cray NV2",
        /// `EM_RX`.
        Rx = 173 => "Renesas RX",
        /// `EM_METAG`.
        Metag = 174 => "Imagination Technologies META",
        /// `EM_MCST_ELBRUS`.
        McstElbrus = 175 => "MCST Elbrus",
        /// `EM_ECOG16`.
        ECog16 = 176 => "Cyan Technology eCOG16",
        /// `EM_CR16`.
        Cr16 = 177 => "National Semiconductor CompactRISC CR16",
        /// `EM_ETPU`.
        Etpu = 178 => "Freescale Extended Time Processing Unit",
        /// `EM_SLE9X`.
        Sle9x = 179 => "Infineon SLE9X",
        /// `EM_L10M`.
        L10m = 180 => "Intel L10M",
        /// `EM_K10M`.
        K10m = 181 => "Intel K10M",
        /// `EM_AARCH64`.
        Aarch64 = 183 => "ARM AArch64",
        /// `EM_AVR32`.
        Avr32 = 185 => "Atmel AVR32",
        /// `EM_STM8`.
        Stm8 = 186 => "STMicroelectronics STM8",
        /// `EM_TILE64`.
        Tile64 = 187 => "Tilera TILE64",
        /// `EM_TILEPRO`.
        TilePro = 188 => "Tilera TILEPro",
        /// `EM_MICROBLAZE`.
        MicroBlaze = 189 => "Xilinx MicroBlaze",
        /// `EM_CUDA`.
        Cuda = 190 => "NVIDIA CUDA",
        /// `EM_TILEGX`.
        TileGx = 191 => "Tilera TILE-Gx",
        /// `EM_CLOUDSHIELD`.
        CloudShield = 192 => "CloudShield",
        /// `EM_COREA_1ST`.
        CoreA1st = 193 => "KIPO-KAIST Core-A 1st generation",
        /// `EM_COREA_2ND`.
        CoreA2nd = 194 => "KIPO-KAIST Core-A 2nd generation",
        /// `EM_ARCV2`.
        ArcV2 = 195 => "Synopsys ARCv2",
        /// `EM_OPEN8`.
        Open8 = 196 => "Open8 RISC",
        /// `EM_RL78`.
        Rl78 = 197 => "Renesas RL78",
        /// `EM_VIDEOCORE5`.
        VideoCore5 = 198 => "Broadcom VideoCore V",
        /// `EM_78KOR`.
        Renesas78kor = 199 => "Renesas 78KOR",
        /// `EM_56800EX`.
        Freescale56800Ex = 200 => "Freescale 56800EX DSC",
        /// `EM_BA1`.
        Ba1 = 201 => "Beyond BA1",
        /// `EM_BA2`.
        Ba2 = 202 => "Beyond BA2",
        /// `EM_XCORE`.
        XCore = 203 => "XMOS xCORE",
        /// `EM_MCHP_PIC`.
        MchpPic = 204 => "Microchip 8-bit PIC",
        /// `EM_INTELGT`.
        IntelGt = 205 => "Intel Graphics Technology",
        /// `EM_KM32`.
        Km32 = 210 => "KM211 KM32",
        /// `EM_KMX32`.
        Kmx32 = 211 => "KM211 KMX32",
        /// `EM_KMX16`.
        Kmx16 = 212 => "KM211 KMX16",
        /// `EM_KMX8`.
        Kmx8 = 213 => "KM211 KMX8",
        /// `EM_KVARC`.
        Kvarc = 214 => "KM211 KVARC",
        /// `EM_CDP`.
        Cdp = 215 => "Paneve CDP",
        /// `EM_COGE`.
        Coge = 216 => "Cognitive Smart Memory Processor",
        /// `EM_COOL`.
        Cool = 217 => "Bluechip CoolEngine",
        /// `EM_NORC`.
        Norc = 218 => "Nanoradio Optimized RISC",
        /// `EM_CSR_KALIMBA`.
        CsrKalimba = 219 => "CSR Kalimba",
        /// `EM_Z80`.
        Z80 = 220 => "Zilog Z80",
        /// `EM_VISIUM`.
        Visium = 221 => "Controls and Data Services VISIUMcore",
        /// `EM_FT32`.
        Ft32 = 222 => "FTDI FT32",
        /// `EM_MOXIE`.
        Moxie = 223 => "Moxie processor",
        /// `EM_AMDGPU`.
        AmdGpu = 224 => "AMD GPU",
        /// `EM_RISCV`.
        RiscV = 243 => "RISC-V",
        /// `EM_LANAI`.
        Lanai = 244 => "Lanai 32-bit",
        /// `EM_CEVA`.
        Ceva = 245 => "CEVA Processor Architecture Family",
        /// `EM_CEVA_X2`.
        CevaX2 = 246 => "CEVA X2 Processor Family",
        /// `EM_BPF`.
        Bpf = 247 => "Linux BPF",
        /// `EM_GRAPHCORE_IPU`.
        GraphcoreIpu = 248 => "Graphcore Intelligent Processing Unit",
        /// `EM_IMG1`.
        Img1 = 249 => "Imagination Technologies",
        /// `EM_NFP`.
        Nfp = 250 => "Netronome Flow Processor",
        /// `EM_VE`.
        Ve = 251 => "NEC Vector Engine",
        /// `EM_CSKY`.
        Csky = 252 => "C-SKY",
        /// `EM_ARC_COMPACT3_64`.
        ArcCompact3_64 = 253 => "Synopsys ARCompact V3 64-bit",
        /// `EM_MCS6502`.
        Mcs6502 = 254 => "MOS Technology MCS 6502",
        /// `EM_ARC_COMPACT3`.
        ArcCompact3 = 255 => "Synopsys ARCompact V3",
        /// `EM_KVX`.
        Kvx = 256 => "Kalray VLIW core",
        /// `EM_65816`.
        Wdc65816 = 257 => "WDC 65816/65C816",
        /// `EM_LOONGARCH`.
        LoongArch = 258 => "LoongArch",
        /// `EM_KF32`.
        Kf32 = 259 => "ChipON KungFu32",
        /// `EM_U16_U8CORE`.
        U16U8Core = 260 => "LAPIS nX-U16/U8",
        /// `EM_TACHYUM`.
        Tachyum = 261 => "Tachyum",
        /// `EM_56800EF`.
        Nxp56800Ef = 262 => "NXP 56800EF DSC",
        /// `EM_SBF`.
        Sbf = 263 => "Solana Bytecode Format",
        /// `EM_AIENGINEV2`.
        AiEngineV2 = 264 => "AMD/Xilinx AIEngineV2",
        /// `EM_SIMA_MLA`.
        SimaMla = 265 => "SiMa MLA",
        /// `EM_BANG`.
        Bang = 266 => "Cambricon BANG",
        /// `EM_LOONGGPU`.
        LoongGpu = 267 => "Loongson LoongGPU",
    }
}
